//! FILENAME: core/dataset/src/dataset.rs
//! Dataset - The (possibly nested) result of a query.
//!
//! A dataset is an ordered list of datums. Each datum maps field names to
//! either a cell value or a nested dataset (the result of a further split).
//! Two views are offered to consumers:
//! - `flatten`: one flat record per leaf, with parent values inlined
//! - `to_json`: the native JSON representation, nesting preserved

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::cell::{CellValue, NumberRange, Scalar, TimeRange};
use crate::error::DatasetError;

// ============================================================================
// DATUM
// ============================================================================

/// A value stored under one attribute of a datum.
#[derive(Debug, Clone, PartialEq)]
pub enum DatumValue {
    Cell(CellValue),
    Nested(Dataset),
}

/// One row of a dataset. Attribute order is kept as inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datum {
    attributes: Vec<(String, DatumValue)>,
}

impl Datum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a cell attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(name, DatumValue::Cell(value.into()));
        self
    }

    /// Builder-style setter for a nested dataset attribute.
    pub fn with_nested(mut self, name: impl Into<String>, dataset: Dataset) -> Self {
        self.set(name, DatumValue::Nested(dataset));
        self
    }

    /// Sets an attribute, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: DatumValue) {
        let name = name.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&DatumValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &DatumValue)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v))
    }
}

// ============================================================================
// FLAT RECORD
// ============================================================================

/// A single flattened record: field name to cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    values: Vec<(String, CellValue)>,
}

impl FlatRecord {
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the value for `name`, or `CellValue::Absent` when missing.
    pub fn value_or_absent(&self, name: &str) -> CellValue {
        self.get(name).cloned().unwrap_or(CellValue::Absent)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    fn set(&mut self, name: &str, value: CellValue) {
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name.to_string(), value)),
        }
    }
}

/// Where a datum that owns nested datasets appears relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlattenOrder {
    /// Only leaves are emitted, carrying their parents' values.
    #[default]
    Inline,
    /// The parent record is emitted before its children.
    Preorder,
    /// The parent record is emitted after its children.
    Postorder,
}

// ============================================================================
// DATASET
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    data: Vec<Datum>,
}

impl Dataset {
    pub fn new(data: Vec<Datum>) -> Self {
        Dataset { data }
    }

    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flattens with the default (inline) order.
    pub fn flatten(&self) -> Vec<FlatRecord> {
        self.flatten_with(FlattenOrder::Inline)
    }

    pub fn flatten_with(&self, order: FlattenOrder) -> Vec<FlatRecord> {
        let mut out = Vec::new();
        self.flatten_into(&FlatRecord::default(), order, &mut out);
        out
    }

    fn flatten_into(&self, prefix: &FlatRecord, order: FlattenOrder, out: &mut Vec<FlatRecord>) {
        for datum in &self.data {
            let mut record = prefix.clone();
            let mut nested = Vec::new();

            for (name, value) in datum.attributes() {
                match value {
                    DatumValue::Cell(cell) => record.set(name, cell.clone()),
                    DatumValue::Nested(dataset) => nested.push(dataset),
                }
            }

            if nested.is_empty() {
                out.push(record);
                continue;
            }

            if order == FlattenOrder::Preorder {
                out.push(record.clone());
            }
            for dataset in nested {
                dataset.flatten_into(&record, order, out);
            }
            if order == FlattenOrder::Postorder {
                out.push(record);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Native JSON representation
    // ------------------------------------------------------------------------

    /// Builds a dataset from its native JSON representation: an array of
    /// objects. Values that fit no cell variant are rejected.
    ///
    /// An empty array cannot be told apart from an empty set and is read as
    /// one, so a datum whose split came back empty (`"split": []`) becomes a
    /// leaf of its own. Build it with `Datum::with_nested` and an empty
    /// dataset when the datum should contribute no rows.
    pub fn from_json(value: &Value) -> Result<Self, DatasetError> {
        let rows = value
            .as_array()
            .ok_or_else(|| DatasetError::InvalidShape("expected an array of objects".to_string()))?;

        let mut data = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let object = row.as_object().ok_or_else(|| {
                DatasetError::InvalidShape(format!("row {} is not an object", index))
            })?;

            let mut datum = Datum::new();
            for (name, attribute) in object {
                datum.set(name.clone(), datum_value_from_json(name, attribute)?);
            }
            data.push(datum);
        }

        Ok(Dataset { data })
    }

    /// The inverse of `from_json`. Absent attributes are omitted.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.data
                .iter()
                .map(|datum| {
                    let mut object = Map::new();
                    for (name, value) in datum.attributes() {
                        let json = match value {
                            DatumValue::Cell(cell) => cell_to_json(cell),
                            DatumValue::Nested(dataset) => Some(dataset.to_json()),
                        };
                        if let Some(json) = json {
                            object.insert(name.to_string(), json);
                        }
                    }
                    Value::Object(object)
                })
                .collect(),
        )
    }
}

fn unsupported(field: &str, reason: impl Into<String>) -> DatasetError {
    DatasetError::UnsupportedValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn datum_value_from_json(field: &str, value: &Value) -> Result<DatumValue, DatasetError> {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            Ok(DatumValue::Nested(Dataset::from_json(value)?))
        }
        Value::Array(items) => {
            let elements = items
                .iter()
                .map(|item| {
                    scalar_from_json(item)
                        .ok_or_else(|| unsupported(field, "set elements must be scalars"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DatumValue::Cell(CellValue::Set(elements)))
        }
        Value::Object(object) => Ok(DatumValue::Cell(range_from_json(field, object)?)),
        other => scalar_from_json(other)
            .map(|s| DatumValue::Cell(CellValue::Scalar(s)))
            .ok_or_else(|| unsupported(field, "unrecognized value")),
    }
}

fn scalar_from_json(value: &Value) -> Option<Scalar> {
    match value {
        Value::Null => Some(Scalar::Null),
        Value::Bool(b) => Some(Scalar::Boolean(*b)),
        Value::Number(n) => n.as_f64().map(Scalar::Number),
        Value::String(s) => Some(Scalar::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// `{start, end}` with both boundaries RFC 3339 strings (a time range) or
/// both numbers (a numeric range).
fn range_from_json(field: &str, object: &Map<String, Value>) -> Result<CellValue, DatasetError> {
    let (start, end) = match (object.get("start"), object.get("end")) {
        (Some(start), Some(end)) if object.len() == 2 => (start, end),
        _ => return Err(unsupported(field, "objects must be {start, end} ranges")),
    };

    match (start, end) {
        (Value::String(start), Value::String(end)) => Ok(CellValue::Range(TimeRange::new(
            time_from_json(field, start)?,
            time_from_json(field, end)?,
        ))),
        (Value::Number(start), Value::Number(end)) => match (start.as_f64(), end.as_f64()) {
            (Some(start), Some(end)) => Ok(CellValue::NumberRange(NumberRange::new(start, end))),
            _ => Err(unsupported(field, "range boundaries are not representable as numbers")),
        },
        _ => Err(unsupported(
            field,
            "range boundaries must both be times or both be numbers",
        )),
    }
}

fn time_from_json(field: &str, raw: &str) -> Result<DateTime<Utc>, DatasetError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| unsupported(field, format!("invalid time '{}': {}", raw, e)))
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Boolean(b) => Value::Bool(*b),
        // Integral values go out as JSON integers so they read back unchanged
        Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            Value::from(*n as i64)
        }
        Scalar::Number(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
        Scalar::Text(s) => Value::String(s.clone()),
    }
}

fn time_to_json(time: &DateTime<Utc>) -> Value {
    Value::String(time.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn range_to_json(start: Value, end: Value) -> Value {
    let mut object = Map::new();
    object.insert("start".to_string(), start);
    object.insert("end".to_string(), end);
    Value::Object(object)
}

fn cell_to_json(cell: &CellValue) -> Option<Value> {
    match cell {
        CellValue::Absent => None,
        CellValue::Scalar(s) => Some(scalar_to_json(s)),
        CellValue::Range(range) => Some(range_to_json(
            time_to_json(&range.start),
            time_to_json(&range.end),
        )),
        CellValue::NumberRange(range) => Some(range_to_json(
            scalar_to_json(&Scalar::Number(range.start)),
            scalar_to_json(&Scalar::Number(range.end)),
        )),
        CellValue::Set(elements) => Some(Value::Array(elements.iter().map(scalar_to_json).collect())),
    }
}
