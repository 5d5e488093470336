//! Caller-supplied translation options.

use serde::{Deserialize, Serialize};

fn default_field() -> String {
    "plain_text".to_string()
}

fn default_retrieve() -> Vec<String> {
    vec!["case_name".to_string(), "date_filed".to_string()]
}

fn default_insert_operators() -> bool {
    true
}

/// Caller-supplied configuration for a single [`crate::translate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Options {
    /// Target field name for term/phrase/prefix/wildcard leaves.
    #[serde(default = "default_field")]
    pub field: String,

    /// Ordered list of projection fields; emitted as `_source` when
    /// non-empty.
    #[serde(default = "default_retrieve")]
    pub retrieve: Vec<String>,

    /// If true, adjacent terms without an operator become `or`-joined;
    /// if false, such input is rejected with `MissingOperator`.
    #[serde(default = "default_insert_operators")]
    pub insert_operators: bool,

    /// Emit the highlight block.
    #[serde(default)]
    pub highlight: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            field: default_field(),
            retrieve: default_retrieve(),
            insert_operators: default_insert_operators(),
            highlight: false,
        }
    }
}
