//! FILENAME: tests/common/mod.rs
//! Fixtures for export integration tests.

#![allow(dead_code)]

use dataset::{Dataset, Dimension, Measure, QueryContext};
use serde_json::{json, Value};

/// Edits per channel and page, split on channel then page.
pub fn wiki_by_channel() -> QueryContext {
    QueryContext::default()
        .with_split(Dimension::new("channel", "Channel"))
        .with_split(Dimension::new("page", "Page"))
        .with_measure(Measure::new("count", "Count"))
        .with_measure(Measure::new("added", "Added"))
}

/// Totals only: no splits, two measures.
pub fn wiki_totals() -> QueryContext {
    QueryContext::default()
        .with_measure(Measure::new("count", "Count"))
        .with_measure(Measure::new("added", "Added"))
}

pub fn nested_wiki_json() -> Value {
    json!([
        {
            "channel": "en",
            "count": 10,
            "split": [
                { "page": "Main", "count": 6, "added": 120.5 },
                { "page": "Talk", "count": 4, "added": 3 }
            ]
        },
        {
            "channel": "fr",
            "count": 2,
            "split": [
                { "page": "Accueil", "count": 2, "added": 0 }
            ]
        }
    ])
}

pub fn dataset_from(value: &Value) -> Dataset {
    Dataset::from_json(value).expect("fixture dataset should parse")
}
