//! FILENAME: core/dataset/src/format.rs
//! PURPOSE: Turns cell values into display strings.
//! CONTEXT: Exporters depend on the `ValueFormatter` trait only, so a host
//! with its own locale rules can plug in a different implementation.
//! Timezones are always passed in by the caller.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::cell::{CellValue, Scalar};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait ValueFormatter {
    /// General-purpose rendering of any cell value.
    fn format_value(&self, value: &CellValue) -> String;

    /// Renders `date` as wall-clock time in `timezone`, optionally followed
    /// by the UTC offset.
    fn format_date_with_tz(&self, date: DateTime<Utc>, timezone: Tz, include_offset: bool) -> String;
}

/// The default formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormatter;

impl ValueFormatter for StandardFormatter {
    fn format_value(&self, value: &CellValue) -> String {
        match value {
            CellValue::Absent => String::new(),
            CellValue::Scalar(s) => format_scalar(s),
            CellValue::Range(range) => format!(
                "{}/{}",
                self.format_date_with_tz(range.start, Tz::UTC, true),
                self.format_date_with_tz(range.end, Tz::UTC, true)
            ),
            CellValue::NumberRange(range) => {
                format!("{} to {}", format_number(range.start), format_number(range.end))
            }
            CellValue::Set(elements) => {
                let members: Vec<String> = elements.iter().map(format_scalar).collect();
                format!("[{}]", members.join(","))
            }
        }
    }

    fn format_date_with_tz(&self, date: DateTime<Utc>, timezone: Tz, include_offset: bool) -> String {
        let local = date.with_timezone(&timezone);
        if include_offset {
            local.format(&format!("{}%:z", DATE_FORMAT)).to_string()
        } else {
            local.format(DATE_FORMAT).to_string()
        }
    }
}

fn format_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Null => String::new(),
        Scalar::Boolean(b) => b.to_string(),
        Scalar::Number(n) => format_number(*n),
        Scalar::Text(s) => s.clone(),
    }
}

/// Canonical decimal form: no exponent, no trailing zeros, integers without
/// a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Also covers -0.0
        return "0".to_string();
    }
    format!("{}", value)
}
