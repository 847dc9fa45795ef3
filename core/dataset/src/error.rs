//! FILENAME: core/dataset/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Invalid dataset shape: {0}")]
    InvalidShape(String),

    #[error("Unsupported value in field '{field}': {reason}")]
    UnsupportedValue { field: String, reason: String },
}
