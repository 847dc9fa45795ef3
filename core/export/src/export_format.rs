//! FILENAME: core/export/src/export_format.rs
//! Supported download formats and their MIME types.

use serde::{Deserialize, Serialize};

pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Target format of an export. Unknown labels resolve to `Json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Tsv,
    Xlsx,
}

impl ExportFormat {
    /// Resolves a user-supplied label. Anything unrecognized, including the
    /// empty string, falls back to JSON.
    pub fn from_label(label: &str) -> Self {
        match label {
            "csv" => ExportFormat::Csv,
            "tsv" => ExportFormat::Tsv,
            "xlsx" => ExportFormat::Xlsx,
            _ => ExportFormat::Json,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Tsv => "text/tsv",
            ExportFormat::Xlsx => XLSX_MIME_TYPE,
            ExportFormat::Json => "application/json",
        }
    }

    /// MIME type with the charset parameter, as sent with the download.
    pub fn content_type(self) -> String {
        format!("{};charset=utf-8", self.mime_type())
    }

    pub fn is_binary(self) -> bool {
        self == ExportFormat::Xlsx
    }
}

impl From<&str> for ExportFormat {
    fn from(label: &str) -> Self {
        ExportFormat::from_label(label)
    }
}

impl From<String> for ExportFormat {
    fn from(label: String) -> Self {
        ExportFormat::from_label(&label)
    }
}

impl From<Option<&str>> for ExportFormat {
    fn from(label: Option<&str>) -> Self {
        label.map(ExportFormat::from_label).unwrap_or_default()
    }
}

/// MIME type for an arbitrary format label.
pub fn mime_type_for_label(label: &str) -> &'static str {
    ExportFormat::from_label(label).mime_type()
}
