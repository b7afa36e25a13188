//! Collapse nested objects into slash-joined variable names.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::PATH_SEPARATOR;

/// Flatten `obj` into `name -> leaf` pairs.
///
/// Each key becomes `prefix/key` (or just `key` for an empty prefix). Plain
/// objects are descended into; every other value, arrays included, is a leaf.
/// Output order follows a depth-first walk of the input.
pub fn flatten(obj: &Map<String, Value>, prefix: &str) -> IndexMap<String, Value> {
    let mut out = IndexMap::new();
    let mut path: Vec<&str> = Vec::new();
    if !prefix.is_empty() {
        path.push(prefix);
    }
    flatten_into(obj, &mut path, &mut out);
    out
}

fn flatten_into<'a>(
    obj: &'a Map<String, Value>,
    path: &mut Vec<&'a str>,
    out: &mut IndexMap<String, Value>,
) {
    for (key, value) in obj {
        path.push(key);
        match value {
            Value::Object(child) => flatten_into(child, path, out),
            leaf => {
                out.insert(path.join(PATH_SEPARATOR), leaf.clone());
            }
        }
        path.pop();
    }
}
