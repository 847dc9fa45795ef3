//! FILENAME: core/dataset/src/cell.rs
//! PURPOSE: Defines the values a single dataset cell can hold.
//! CONTEXT: A cell is either absent (the record has no such field), a plain
//! scalar, a time range, a numeric range or a set of scalars. Encoders match on these
//! variants exhaustively, so a new variant has to be handled everywhere.

use chrono::{DateTime, Utc};

/// A plain value as produced by the query layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
}

/// A half-open time interval. Only `start` is shown in tabular exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeRange { start, end }
    }
}

/// A half-open numeric interval, as produced by bucketing splits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    pub start: f64,
    pub end: f64,
}

impl NumberRange {
    pub fn new(start: f64, end: f64) -> Self {
        NumberRange { start, end }
    }
}

/// The value found at one (record, field) position.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// The record did not carry the field at all.
    Absent,
    Scalar(Scalar),
    Range(TimeRange),
    NumberRange(NumberRange),
    Set(Vec<Scalar>),
}

impl CellValue {
    pub fn null() -> Self {
        CellValue::Scalar(Scalar::Null)
    }

    pub fn number(n: f64) -> Self {
        CellValue::Scalar(Scalar::Number(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Scalar(Scalar::Text(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        CellValue::Scalar(Scalar::Boolean(b))
    }

    pub fn set<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        CellValue::Set(elements.into_iter().map(Into::into).collect())
    }

    /// True for values that render as nothing (absent or null).
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Absent | CellValue::Scalar(Scalar::Null))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<Scalar> for CellValue {
    fn from(value: Scalar) -> Self {
        CellValue::Scalar(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Scalar(Scalar::Number(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Scalar(Scalar::Boolean(value))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::text(value)
    }
}

impl From<TimeRange> for CellValue {
    fn from(value: TimeRange) -> Self {
        CellValue::Range(value)
    }
}

impl From<NumberRange> for CellValue {
    fn from(value: NumberRange) -> Self {
        CellValue::NumberRange(value)
    }
}
