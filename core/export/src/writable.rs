//! FILENAME: core/export/src/writable.rs
//! The export pipeline: plan columns, flatten rows, encode.
//!
//! JSON is the odd one out: it serializes the dataset's native
//! representation directly, so nesting survives. All other formats go
//! through the column plan and the flattened rows.

use dataset::{Dataset, QueryContext, StandardFormatter, ValueFormatter};

use crate::columns::plan_query_columns;
use crate::export_format::ExportFormat;
use crate::options::ExportOptions;
use crate::rows::ExportTable;
use crate::separated::{encode_separated, Separator};
use crate::xlsx_writer::encode_xlsx;
use crate::ExportError;

/// A finished export, ready to hand to a file-save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Writable {
    Text(String),
    Binary(Vec<u8>),
}

impl Writable {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Writable::Text(s) => s.as_bytes(),
            Writable::Binary(b) => b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Writable::Text(s) => Some(s),
            Writable::Binary(_) => None,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Writable::Text(s) => s.into_bytes(),
            Writable::Binary(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Pretty-printed (2-space) native representation of the dataset.
pub fn dataset_to_json(dataset: &Dataset) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&dataset.to_json())?)
}

pub fn dataset_to_separated_values<F>(
    ctx: &QueryContext,
    dataset: &Dataset,
    separator: Separator,
    options: &ExportOptions,
    formatter: &F,
) -> Result<String, ExportError>
where
    F: ValueFormatter + ?Sized,
{
    let table = build_table(ctx, dataset, options)?;
    Ok(encode_separated(&table, separator, ctx.timezone, formatter))
}

pub fn dataset_to_xlsx<F>(
    ctx: &QueryContext,
    dataset: &Dataset,
    options: &ExportOptions,
    formatter: &F,
) -> Result<Vec<u8>, ExportError>
where
    F: ValueFormatter + ?Sized,
{
    let table = build_table(ctx, dataset, options)?;
    encode_xlsx(&table, &options.sheet_name, ctx.timezone, formatter)
}

/// Runs the whole pipeline with the standard formatter.
pub fn dataset_to_writable(
    ctx: &QueryContext,
    dataset: &Dataset,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Writable, ExportError> {
    dataset_to_writable_with(ctx, dataset, format, options, &StandardFormatter)
}

/// Runs the whole pipeline with a caller-supplied formatter.
pub fn dataset_to_writable_with<F>(
    ctx: &QueryContext,
    dataset: &Dataset,
    format: ExportFormat,
    options: &ExportOptions,
    formatter: &F,
) -> Result<Writable, ExportError>
where
    F: ValueFormatter + ?Sized,
{
    match format {
        ExportFormat::Json => dataset_to_json(dataset).map(Writable::Text),
        ExportFormat::Csv => {
            dataset_to_separated_values(ctx, dataset, Separator::Comma, options, formatter)
                .map(Writable::Text)
        }
        ExportFormat::Tsv => {
            dataset_to_separated_values(ctx, dataset, Separator::Tab, options, formatter)
                .map(Writable::Text)
        }
        ExportFormat::Xlsx => dataset_to_xlsx(ctx, dataset, options, formatter).map(Writable::Binary),
    }
}

/// Like `dataset_to_writable`, but workbook serialization runs on the
/// blocking pool. The future resolves once, with the buffer or the
/// encoding error; dropping it discards the result.
pub async fn dataset_to_writable_async(
    ctx: &QueryContext,
    dataset: &Dataset,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Writable, ExportError> {
    dataset_to_writable_async_with(ctx, dataset, format, options, StandardFormatter).await
}

/// Async pipeline with a caller-supplied formatter. The formatter moves
/// onto the blocking pool together with the table.
pub async fn dataset_to_writable_async_with<F>(
    ctx: &QueryContext,
    dataset: &Dataset,
    format: ExportFormat,
    options: &ExportOptions,
    formatter: F,
) -> Result<Writable, ExportError>
where
    F: ValueFormatter + Send + 'static,
{
    if format != ExportFormat::Xlsx {
        return dataset_to_writable_with(ctx, dataset, format, options, &formatter);
    }

    let table = build_table(ctx, dataset, options)?;
    let sheet_name = options.sheet_name.clone();
    let timezone = ctx.timezone;

    let bytes = tokio::task::spawn_blocking(move || {
        encode_xlsx(&table, &sheet_name, timezone, &formatter)
    })
    .await
    .map_err(|e| ExportError::Task(e.to_string()))??;

    Ok(Writable::Binary(bytes))
}

fn build_table(
    ctx: &QueryContext,
    dataset: &Dataset,
    options: &ExportOptions,
) -> Result<ExportTable, ExportError> {
    let spec = plan_query_columns(ctx)?;
    Ok(ExportTable::build(&spec, dataset, options.flatten_order))
}
