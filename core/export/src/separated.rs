//! FILENAME: core/export/src/separated.rs
//! CSV and TSV encoding.
//!
//! Every field, the heading row included, is wrapped in double quotes
//! whether or not it needs it. Embedded quotes are written as-is.

use dataset::{CellValue, Tz, ValueFormatter};

use crate::rows::ExportTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Tab,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Tab => "\t",
        }
    }
}

/// Text for one cell before quoting. Time ranges show their start time in
/// the export timezone, without an offset suffix; everything else, numeric
/// ranges included, goes through the general value formatter.
pub fn render_cell<F>(value: &CellValue, timezone: Tz, formatter: &F) -> String
where
    F: ValueFormatter + ?Sized,
{
    match value {
        CellValue::Range(range) => formatter.format_date_with_tz(range.start, timezone, false),
        other => formatter.format_value(other),
    }
}

pub fn encode_separated<F>(
    table: &ExportTable,
    separator: Separator,
    timezone: Tz,
    formatter: &F,
) -> String
where
    F: ValueFormatter + ?Sized,
{
    table
        .text_rows()
        .map(|row| {
            row.iter()
                .map(|value| format!("\"{}\"", render_cell(value, timezone, formatter)))
                .collect::<Vec<_>>()
                .join(separator.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dataset::{NumberRange, StandardFormatter, TimeRange};

    fn table() -> ExportTable {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        ExportTable {
            headings: vec!["Time".to_string(), "Tags".to_string(), "Count".to_string()],
            rows: vec![
                vec![
                    CellValue::Range(TimeRange::new(start, end)),
                    CellValue::set(["dear", "john"]),
                    CellValue::number(12.0),
                ],
                vec![CellValue::Absent, CellValue::null(), CellValue::number(0.25)],
            ],
        }
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let csv = encode_separated(&table(), Separator::Comma, Tz::UTC, &StandardFormatter);
        assert_eq!(
            csv,
            "\"Time\",\"Tags\",\"Count\"\n\
             \"2024-05-01 00:00:00\",\"[dear,john]\",\"12\"\n\
             \"\",\"\",\"0.25\""
        );
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let tsv = encode_separated(&table(), Separator::Tab, Tz::UTC, &StandardFormatter);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\"Time\"\t\"Tags\"\t\"Count\"");
        assert!(tsv.contains("[dear,john]"));
    }

    #[test]
    fn test_range_uses_export_timezone() {
        let csv = encode_separated(
            &table(),
            Separator::Comma,
            chrono_tz::Europe::Berlin,
            &StandardFormatter,
        );
        assert!(csv.contains("\"2024-05-01 02:00:00\""));
    }

    #[test]
    fn test_number_range_uses_value_formatter() {
        let table = ExportTable {
            headings: vec!["Bucket".to_string()],
            rows: vec![vec![CellValue::NumberRange(NumberRange::new(0.0, 10.0))]],
        };
        let csv = encode_separated(&table, Separator::Comma, Tz::UTC, &StandardFormatter);
        assert_eq!(csv, "\"Bucket\"\n\"0 to 10\"");
    }

    #[test]
    fn test_embedded_quotes_are_not_escaped() {
        let table = ExportTable {
            headings: vec!["Title".to_string()],
            rows: vec![vec![CellValue::text("say \"hi\"")]],
        };
        let csv = encode_separated(&table, Separator::Comma, Tz::UTC, &StandardFormatter);
        assert_eq!(csv, "\"Title\"\n\"say \"hi\"\"");
    }

    #[test]
    fn test_empty_table() {
        let csv = encode_separated(&ExportTable::default(), Separator::Comma, Tz::UTC, &StandardFormatter);
        assert_eq!(csv, "");
    }
}
