//! FILENAME: core/export/src/error.rs

use dataset::DatasetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Split references unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Worksheet limit exceeded at row {row}, column {col}")]
    WorksheetLimit { row: usize, col: usize },

    #[error("Export task failed: {0}")]
    Task(String),
}
