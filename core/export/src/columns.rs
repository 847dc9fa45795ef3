//! FILENAME: core/export/src/columns.rs
//! Column planning: which columns an export has and in what order.
//!
//! The plan depends only on the query shape, never on the row values:
//! split dimensions first (in split order), then effective measures (in
//! selection order). Every encoder mirrors this order.

use dataset::{Dimension, Measure, QueryContext};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Dimension,
    Measure,
}

/// One output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Lookup key into flattened records.
    pub name: String,
    /// Column header.
    pub title: String,
    pub kind: FieldKind,
}

/// Ordered output columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    fields: Vec<Field>,
}

impl FieldSpec {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column titles in column order.
    pub fn headings(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.title.clone()).collect()
    }
}

/// Plans columns from already-resolved split dimensions and measures.
pub fn plan_columns<'a, D, M>(split_dimensions: D, effective_measures: M) -> FieldSpec
where
    D: IntoIterator<Item = &'a Dimension>,
    M: IntoIterator<Item = &'a Measure>,
{
    let dimensions = split_dimensions.into_iter().map(|d| Field {
        name: d.name.clone(),
        title: d.title.clone(),
        kind: FieldKind::Dimension,
    });
    let measures = effective_measures.into_iter().map(|m| Field {
        name: m.name.clone(),
        title: m.title.clone(),
        kind: FieldKind::Measure,
    });

    FieldSpec {
        fields: dimensions.chain(measures).collect(),
    }
}

/// Resolves the query's splits and effective measures, then plans columns.
pub fn plan_query_columns(ctx: &QueryContext) -> Result<FieldSpec, ExportError> {
    let dimensions = ctx
        .splits
        .iter()
        .map(|split| {
            split
                .resolve_dimension(&ctx.dimensions)
                .ok_or_else(|| ExportError::UnknownDimension(split.dimension.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let spec = plan_columns(dimensions, ctx.effective_measures());
    trace!("planned {} export columns", spec.len());
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::Split;

    #[test]
    fn test_dimensions_precede_measures() {
        let dims = [Dimension::new("channel", "Channel"), Dimension::new("page", "Page")];
        let measures = [Measure::new("count", "Count"), Measure::new("added", "Added")];

        let spec = plan_columns(&dims, &measures);
        assert_eq!(spec.len(), 4);
        let kinds: Vec<FieldKind> = spec.fields().iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![FieldKind::Dimension, FieldKind::Dimension, FieldKind::Measure, FieldKind::Measure]
        );
        assert_eq!(spec.headings(), vec!["Channel", "Page", "Count", "Added"]);
        assert_eq!(spec.fields()[0].name, "channel");
    }

    #[test]
    fn test_empty_inputs() {
        let spec = plan_columns(&[] as &[Dimension], &[] as &[Measure]);
        assert!(spec.is_empty());

        let only_measures = plan_columns(&[] as &[Dimension], &[Measure::new("count", "Count")]);
        assert_eq!(only_measures.headings(), vec!["Count"]);
    }

    #[test]
    fn test_plan_from_query_context() {
        let mut ctx = QueryContext::default()
            .with_measure(Measure::new("count", "Count"))
            .with_split(Dimension::new("time", "Time"));
        ctx.dimensions.push(Dimension::new("user", "User"));
        ctx.splits.push(Split::on("user"));

        let spec = plan_query_columns(&ctx).unwrap();
        let names: Vec<&str> = spec.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["time", "user", "count"]);
    }

    #[test]
    fn test_unknown_split_dimension() {
        let mut ctx = QueryContext::default();
        ctx.splits.push(Split::on("nowhere"));
        assert!(matches!(
            plan_query_columns(&ctx),
            Err(ExportError::UnknownDimension(name)) if name == "nowhere"
        ));
    }
}
