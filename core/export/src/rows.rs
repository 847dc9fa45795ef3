//! FILENAME: core/export/src/rows.rs
//! Row flattening: dataset records aligned to the planned columns.

use dataset::{CellValue, Dataset, FlattenOrder};

use crate::columns::FieldSpec;

/// Cell values index-aligned with a `FieldSpec`.
pub type Row = Vec<CellValue>;

/// Column titles plus data rows, kept apart so formats with a real header
/// concept can treat titles differently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportTable {
    pub headings: Vec<String>,
    pub rows: Vec<Row>,
}

impl ExportTable {
    pub fn build(spec: &FieldSpec, dataset: &Dataset, order: FlattenOrder) -> Self {
        ExportTable {
            headings: spec.headings(),
            rows: data_rows(spec, dataset, order),
        }
    }

    pub fn width(&self) -> usize {
        self.headings.len()
    }

    /// All rows with the heading row first, as textual formats write them.
    pub fn text_rows(&self) -> impl Iterator<Item = Row> + '_ {
        let heading: Row = self.headings.iter().map(|t| CellValue::text(t.as_str())).collect();
        std::iter::once(heading).chain(self.rows.iter().cloned())
    }
}

/// Heading row followed by one row per flattened record.
pub fn to_rows(spec: &FieldSpec, dataset: &Dataset) -> Vec<Row> {
    ExportTable::build(spec, dataset, FlattenOrder::Inline)
        .text_rows()
        .collect()
}

/// One row per flattened record; fields missing from a record are
/// `CellValue::Absent`.
pub fn data_rows(spec: &FieldSpec, dataset: &Dataset, order: FlattenOrder) -> Vec<Row> {
    dataset
        .flatten_with(order)
        .iter()
        .map(|record| {
            spec.fields()
                .iter()
                .map(|field| record.value_or_absent(&field.name))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::plan_columns;
    use dataset::{Datum, Dimension, Measure};

    fn spec() -> FieldSpec {
        plan_columns(
            &[Dimension::new("channel", "Channel")],
            &[Measure::new("count", "Count"), Measure::new("added", "Added")],
        )
    }

    #[test]
    fn test_rows_follow_field_order() {
        let ds = Dataset::new(vec![
            Datum::new().with("added", 5.0).with("channel", "en").with("count", 1.0),
            Datum::new().with("channel", "fr").with("extra", "ignored"),
        ]);

        let rows = to_rows(&spec(), &ds);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec![CellValue::text("Channel"), CellValue::text("Count"), CellValue::text("Added")]
        );
        assert_eq!(
            rows[1],
            vec![CellValue::text("en"), CellValue::number(1.0), CellValue::number(5.0)]
        );
        assert_eq!(
            rows[2],
            vec![CellValue::text("fr"), CellValue::Absent, CellValue::Absent]
        );
    }

    #[test]
    fn test_nested_dataset_is_flattened() {
        let inner = Dataset::new(vec![
            Datum::new().with("count", 2.0),
            Datum::new().with("count", 3.0),
        ]);
        let ds = Dataset::new(vec![Datum::new().with("channel", "en").with_nested("split", inner)]);

        let table = ExportTable::build(&spec(), &ds, FlattenOrder::Inline);
        assert_eq!(table.width(), 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][0], CellValue::text("en"));
        assert_eq!(table.rows[1][1], CellValue::number(3.0));
    }

    #[test]
    fn test_empty_dataset_yields_heading_only() {
        let rows = to_rows(&spec(), &Dataset::default());
        assert_eq!(rows.len(), 1);

        let rows = to_rows(&FieldSpec::default(), &Dataset::new(vec![Datum::new()]));
        assert_eq!(rows, vec![Vec::new(), Vec::new()]);
    }
}
