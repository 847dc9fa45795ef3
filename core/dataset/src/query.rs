//! FILENAME: core/dataset/src/query.rs
//! Query shape - which dimensions a result is split on and which measures
//! are shown. Deserializable so a caller can hand it over as JSON.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A field results can be grouped by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub title: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Dimension {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// An aggregated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub name: String,
    pub title: String,
}

impl Measure {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Measure {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// A split references a dimension by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub dimension: String,
}

impl Split {
    pub fn on(dimension: impl Into<String>) -> Self {
        Split {
            dimension: dimension.into(),
        }
    }

    pub fn resolve_dimension<'a>(&self, dimensions: &'a [Dimension]) -> Option<&'a Dimension> {
        dimensions.iter().find(|d| d.name == self.dimension)
    }
}

fn default_timezone() -> Tz {
    Tz::UTC
}

/// Everything about the query the export needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryContext {
    /// All dimensions of the data source.
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    /// Active splits, outermost first.
    #[serde(default)]
    pub splits: Vec<Split>,
    /// All measures of the data source.
    #[serde(default)]
    pub measures: Vec<Measure>,
    /// Names of the selected measures, in selection order.
    #[serde(default)]
    pub selected_measures: Vec<String>,
    /// Used to render time values.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
}

impl QueryContext {
    pub fn new(timezone: Tz) -> Self {
        QueryContext {
            dimensions: Vec::new(),
            splits: Vec::new(),
            measures: Vec::new(),
            selected_measures: Vec::new(),
            timezone,
        }
    }

    /// Registers a dimension and splits on it.
    pub fn with_split(mut self, dimension: Dimension) -> Self {
        self.splits.push(Split::on(dimension.name.clone()));
        if !self.dimensions.iter().any(|d| d.name == dimension.name) {
            self.dimensions.push(dimension);
        }
        self
    }

    /// Registers a measure and selects it.
    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.selected_measures.push(measure.name.clone());
        if !self.measures.iter().any(|m| m.name == measure.name) {
            self.measures.push(measure);
        }
        self
    }

    /// The selected measures in selection order. Unknown names are skipped.
    pub fn effective_measures(&self) -> Vec<&Measure> {
        self.selected_measures
            .iter()
            .filter_map(|name| self.measures.iter().find(|m| &m.name == name))
            .collect()
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new(default_timezone())
    }
}
