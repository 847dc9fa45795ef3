//! FILENAME: core/export/src/xlsx_writer.rs

use dataset::{CellValue, Scalar, Tz, ValueFormatter};
use rust_xlsxwriter::{ColNum, DocProperties, ExcelDateTime, Format, RowNum, Workbook, Worksheet};

use crate::rows::ExportTable;
use crate::ExportError;

/// Writes the table into a single-sheet workbook and returns the file bytes.
///
/// Cells keep their types: numbers stay numeric and booleans stay boolean so
/// spreadsheet users can sort and filter them. Time ranges become their
/// start time in `timezone`, numeric ranges their formatted text; blanks
/// are left empty.
pub fn encode_xlsx<F>(
    table: &ExportTable,
    sheet_name: &str,
    timezone: Tz,
    formatter: &F,
) -> Result<Vec<u8>, ExportError>
where
    F: ValueFormatter + ?Sized,
{
    let mut xlsx = Workbook::new();

    // Pinned creation time keeps output byte-identical between runs
    let properties =
        DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(2000, 1, 1)?);
    xlsx.set_properties(&properties);

    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let heading_format = Format::new().set_bold();
    for (col, title) in table.headings.iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(0, col)?, title, &heading_format)?;
    }
    if !table.headings.is_empty() {
        worksheet.set_freeze_panes(1, 0)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_idx = row_num(index + 1, 0)?;
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, row_idx, col_num(index + 1, col)?, value, timezone, formatter)?;
        }
    }

    Ok(xlsx.save_to_buffer()?)
}

fn write_cell<F>(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &CellValue,
    timezone: Tz,
    formatter: &F,
) -> Result<(), ExportError>
where
    F: ValueFormatter + ?Sized,
{
    match value {
        CellValue::Absent | CellValue::Scalar(Scalar::Null) => {}
        CellValue::Scalar(Scalar::Number(n)) if n.is_finite() => {
            worksheet.write_number(row, col, *n)?;
        }
        CellValue::Scalar(Scalar::Number(_)) | CellValue::NumberRange(_) | CellValue::Set(_) => {
            worksheet.write_string(row, col, formatter.format_value(value))?;
        }
        CellValue::Scalar(Scalar::Boolean(b)) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        CellValue::Scalar(Scalar::Text(s)) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Range(range) => {
            let start = formatter.format_date_with_tz(range.start, timezone, false);
            worksheet.write_string(row, col, start)?;
        }
    }
    Ok(())
}

fn row_num(row: usize, col: usize) -> Result<RowNum, ExportError> {
    RowNum::try_from(row).map_err(|_| ExportError::WorksheetLimit { row, col })
}

fn col_num(row: usize, col: usize) -> Result<ColNum, ExportError> {
    ColNum::try_from(col).map_err(|_| ExportError::WorksheetLimit { row, col })
}
