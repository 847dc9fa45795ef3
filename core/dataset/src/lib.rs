//! FILENAME: core/dataset/src/lib.rs
//! PURPOSE: Query results as handed to exporters.
//! CONTEXT: Cell values, nested datasets, the query shape that produced
//! them, and the value formatter used to render them as text.

pub mod cell;
pub mod dataset;
pub mod error;
pub mod format;
pub mod query;

// Re-export commonly used types at the crate root
pub use cell::{CellValue, NumberRange, Scalar, TimeRange};
pub use dataset::{Dataset, Datum, DatumValue, FlatRecord, FlattenOrder};
pub use error::DatasetError;
pub use format::{format_number, StandardFormatter, ValueFormatter};
pub use query::{Dimension, Measure, QueryContext, Split};

pub use chrono_tz::Tz;
