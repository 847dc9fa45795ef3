//! FILENAME: core/export/src/options.rs
//! Per-request export settings. The timezone is not here: it comes with the
//! query context.

use dataset::FlattenOrder;
use serde::{Deserialize, Serialize};

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Name of the single worksheet in XLSX exports.
    pub sheet_name: String,
    /// How nested datasets are flattened for tabular formats.
    pub flatten_order: FlattenOrder,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            sheet_name: default_sheet_name(),
            flatten_order: FlattenOrder::Inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_use_defaults() {
        let options: ExportOptions = serde_json::from_str(r#"{ "flatten_order": "preorder" }"#).unwrap();
        assert_eq!(options.sheet_name, "Sheet1");
        assert_eq!(options.flatten_order, FlattenOrder::Preorder);
    }
}
