//! Wraps the lowered clause tree with the optional `_source` and
//! `highlight` members to produce the final request document.

use serde_json::{json, Value};

use crate::options::Options;

/// Assemble the root document around an already-lowered `query` clause
/// tree.
pub fn assemble(query: Value, options: &Options) -> Value {
    let mut root = serde_json::Map::new();
    root.insert("query".to_string(), query);

    if !options.retrieve.is_empty() {
        root.insert("_source".to_string(), json!(options.retrieve));
    }

    if options.highlight {
        // Always highlights `plain_text`, regardless of the configured
        // search field.
        root.insert(
            "highlight".to_string(),
            json!({
                "order": "score",
                "fields": { "plain_text": { "number_of_fragments": 3 } },
            }),
        );
    }

    Value::Object(root)
}
