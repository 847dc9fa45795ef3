//! FILENAME: core/export/src/lib.rs
//! Dataset Export Module
//!
//! Renders query results into downloadable JSON, CSV, TSV and XLSX files.
//!
//! Layers:
//! - `columns`: which columns an export has (query shape only)
//! - `rows`: dataset records aligned to those columns
//! - `separated` / `xlsx_writer`: format encoders
//! - `writable` / `download`: the assembled pipeline

mod error;

pub mod columns;
pub mod download;
pub mod export_format;
pub mod file_name;
pub mod options;
pub mod rows;
pub mod separated;
pub mod writable;
pub mod xlsx_writer;

pub use columns::{plan_columns, plan_query_columns, Field, FieldKind, FieldSpec};
pub use download::{
    download_extension, download_file_name, prepare_download, prepare_download_async, Download,
};
pub use error::ExportError;
pub use export_format::{mime_type_for_label, ExportFormat, XLSX_MIME_TYPE};
pub use file_name::{make_file_name, MAX_FILE_NAME_CHARS};
pub use options::ExportOptions;
pub use rows::{data_rows, to_rows, ExportTable, Row};
pub use separated::{encode_separated, render_cell, Separator};
pub use writable::{
    dataset_to_json, dataset_to_separated_values, dataset_to_writable,
    dataset_to_writable_async, dataset_to_writable_async_with, dataset_to_writable_with,
    dataset_to_xlsx, Writable,
};
pub use xlsx_writer::encode_xlsx;
