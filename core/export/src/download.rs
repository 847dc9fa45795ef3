//! FILENAME: core/export/src/download.rs
//! Download assembly: an encoded export plus the file name and content
//! type the caller's save mechanism needs.

use chrono::{DateTime, Utc};
use dataset::{Dataset, QueryContext};
use log::debug;

use crate::export_format::ExportFormat;
use crate::options::ExportOptions;
use crate::writable::{dataset_to_writable, dataset_to_writable_async, Writable};
use crate::ExportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Base name plus extension.
    pub file_name: String,
    /// MIME type with `charset=utf-8`.
    pub content_type: String,
    pub body: Writable,
}

/// Extension for a requested format label. A plain alphanumeric label is
/// kept as given, so `"txt"` downloads as `.txt` even though its body is
/// JSON; anything else uses the resolved format's extension.
pub fn download_extension(format_label: Option<&str>) -> &str {
    match format_label {
        Some(label) if !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric()) => label,
        other => ExportFormat::from(other).extension(),
    }
}

/// `{base}.{extension}`, falling back to a timestamped name when `base` is
/// missing or empty.
pub fn download_file_name(
    base: Option<&str>,
    format_label: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    let base = match base {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{}-data", now.format("%Y-%m-%dT%H-%M-%S")),
    };
    format!("{}.{}", base, download_extension(format_label))
}

/// Encodes `dataset` in the format named by `format_label` (JSON when the
/// label is missing or unknown) and names the file after the label.
pub fn prepare_download(
    ctx: &QueryContext,
    dataset: &Dataset,
    file_name: Option<&str>,
    format_label: Option<&str>,
    options: &ExportOptions,
) -> Result<Download, ExportError> {
    let format = ExportFormat::from(format_label);
    let body = dataset_to_writable(ctx, dataset, format, options)?;
    Ok(assemble(file_name, format_label, format, body))
}

pub async fn prepare_download_async(
    ctx: &QueryContext,
    dataset: &Dataset,
    file_name: Option<&str>,
    format_label: Option<&str>,
    options: &ExportOptions,
) -> Result<Download, ExportError> {
    let format = ExportFormat::from(format_label);
    let body = dataset_to_writable_async(ctx, dataset, format, options).await?;
    Ok(assemble(file_name, format_label, format, body))
}

fn assemble(
    file_name: Option<&str>,
    format_label: Option<&str>,
    format: ExportFormat,
    body: Writable,
) -> Download {
    let download = Download {
        file_name: download_file_name(file_name, format_label, Utc::now()),
        content_type: format.content_type(),
        body,
    };
    debug!(
        "prepared {:?} download '{}' ({} bytes)",
        format,
        download.file_name,
        download.body.len()
    );
    download
}
