//! JSON dialect detection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key marking an object as a DTCG token.
pub const DTCG_VALUE_KEY: &str = "$value";

/// The two JSON token layouts the parser understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `{ "Collection": { "name": value, "nested": { ... } } }`
    Simple,
    /// Design Tokens Community Group: tokens are `{ "$value": ..., "$type": ... }`.
    Dtcg,
}

/// Classify a whole document. A single `$value` anywhere makes it DTCG.
pub fn detect_dialect(doc: &Value) -> Dialect {
    if contains_dtcg_tokens(doc) {
        Dialect::Dtcg
    } else {
        Dialect::Simple
    }
}

/// Returns true if any object at any depth has a `$value` key. Arrays are
/// searched as well.
pub fn contains_dtcg_tokens(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(DTCG_VALUE_KEY) || map.values().any(contains_dtcg_tokens)
        }
        Value::Array(items) => items.iter().any(contains_dtcg_tokens),
        _ => false,
    }
}
