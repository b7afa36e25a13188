//! JSON token documents, in either the simple/nested or the DTCG dialect.
//!
//! The entry point is [`parse_json`]. The dialect is decided once for the
//! whole document by [`detect_dialect`]; mixing dialects in one file is not
//! supported.

use serde_json::{Map, Value};

use crate::dialect::{detect_dialect, Dialect, DTCG_VALUE_KEY};
use crate::error::ParseError;
use crate::flatten::flatten;
use crate::model::CanonicalModel;
use crate::value::TokenValue;
use crate::{DEFAULT_COLLECTION, PATH_SEPARATOR};

/// Parse a JSON token document.
///
/// Fails only on malformed JSON. A well-formed document with nothing usable
/// in it (including a non-object root) gives an empty model.
pub fn parse_json(text: &str) -> Result<CanonicalModel, ParseError> {
    let doc: Value = serde_json::from_str(text)?;
    let dialect = detect_dialect(&doc);

    let model = match (&doc, dialect) {
        (Value::Object(root), Dialect::Dtcg) => parse_dtcg(root),
        (Value::Object(root), Dialect::Simple) => parse_simple(root),
        _ => CanonicalModel::new(),
    };

    tracing::debug!(
        ?dialect,
        collections = model.len(),
        tokens = model.token_count(),
        "parsed JSON token document"
    );
    Ok(model)
}

// ── DTCG ────────────────────────────────────────────────────────────

fn is_metadata_key(key: &str) -> bool {
    key.starts_with('$')
}

fn parse_dtcg(root: &Map<String, Value>) -> CanonicalModel {
    let mut model = CanonicalModel::new();

    // A token at the very root has neither collection nor name.
    if let Some(value) = root.get(DTCG_VALUE_KEY) {
        insert_token(&mut model, DEFAULT_COLLECTION, &[], value);
        return model;
    }

    let mut path: Vec<String> = Vec::new();
    for (collection, node) in root {
        if is_metadata_key(collection) {
            continue;
        }
        walk_dtcg(node, collection, &mut path, &mut model);
    }
    model
}

/// Depth-first walk below the collection level. `path` holds the keys
/// traversed so far and is restored before returning.
fn walk_dtcg(node: &Value, collection: &str, path: &mut Vec<String>, model: &mut CanonicalModel) {
    match node {
        Value::Object(map) => {
            if let Some(value) = map.get(DTCG_VALUE_KEY) {
                insert_token(model, collection, path, value);
                return;
            }
            for (key, child) in map {
                if is_metadata_key(key) {
                    continue;
                }
                path.push(key.clone());
                walk_dtcg(child, collection, path, model);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push(index.to_string());
                walk_dtcg(child, collection, path, model);
                path.pop();
            }
        }
        // Bare scalars outside a `$value` are not tokens.
        _ => {}
    }
}

fn insert_token(model: &mut CanonicalModel, collection: &str, path: &[String], value: &Value) {
    let name = path.join(PATH_SEPARATOR);
    match TokenValue::from_json_coerced(value) {
        Some(token) => model.insert(collection, name, token),
        None => tracing::debug!(collection, name = %name, "skipping token with null $value"),
    }
}

// ── Simple / nested ─────────────────────────────────────────────────

fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn parse_simple(root: &Map<String, Value>) -> CanonicalModel {
    let mut model = CanonicalModel::new();

    for (key, value) in root {
        match value {
            Value::Object(members) => {
                let Some(existing) = model.collection_mut(key) else {
                    continue;
                };
                if members.values().all(is_primitive) {
                    // A flat collection object replaces whatever was filed
                    // under its name, including earlier top-level scalars in
                    // `Default`.
                    existing.clear();
                    for (name, member) in members {
                        insert_native(&mut model, key, name.clone(), member);
                    }
                } else {
                    for (name, leaf) in flatten(members, "") {
                        insert_native(&mut model, key, name, &leaf);
                    }
                }
            }
            other => insert_native(&mut model, DEFAULT_COLLECTION, key.clone(), other),
        }
    }
    model
}

/// JSON-native values are already typed and are not coerced.
fn insert_native(model: &mut CanonicalModel, collection: &str, name: String, value: &Value) {
    match TokenValue::from_json(value) {
        Some(token) => model.insert(collection, name, token),
        None => tracing::debug!(collection, name = %name, "skipping null token value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::error::ParseErrorKind;

    #[test]
    fn simple_collections_keep_primitives_uncoerced() {
        let model = parse_json(r##"{"Colors": {"red": "#FF0000"}, "flag": true}"##).unwrap();
        assert_eq!(model.collection_names().collect::<Vec<_>>(), vec!["Colors", "Default"]);
        assert_eq!(
            model.get("Colors", "red"),
            Some(&TokenValue::String("#FF0000".into()))
        );
        assert_eq!(model.get("Default", "flag"), Some(&TokenValue::Boolean(true)));
    }

    #[test]
    fn simple_numbers_in_strings_stay_strings() {
        let model = parse_json(r#"{"Sizes": {"base": "16", "ratio": 1.25}}"#).unwrap();
        assert_eq!(model.get("Sizes", "base"), Some(&TokenValue::String("16".into())));
        assert_eq!(model.get("Sizes", "ratio"), Some(&TokenValue::Number(1.25)));
    }

    #[test]
    fn simple_nested_collection_is_flattened() {
        let text = r##"{"Theme": {"brand": {"primary": "blue", "muted": {"fg": "#333333"}}, "gap": 4}}"##;
        let model = parse_json(text).unwrap();
        let theme = model.collection("Theme").unwrap();
        let names: Vec<_> = theme.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["brand/primary", "brand/muted/fg", "gap"]);
        assert_eq!(theme["gap"], TokenValue::Number(4.0));
    }

    #[test]
    fn simple_nulls_are_dropped_and_arrays_kept_as_text() {
        let model = parse_json(r#"{"A": {"x": null, "y": 1}, "list": [1, 2]}"#).unwrap();
        assert_eq!(model.collection("A").unwrap().len(), 1);
        assert_eq!(model.get("Default", "list"), Some(&TokenValue::String("[1,2]".into())));
    }

    #[test]
    fn flat_default_object_replaces_earlier_scalars() {
        let model = parse_json(r#"{"flag": true, "Default": {"a": 1}}"#).unwrap();
        let default = model.collection("Default").unwrap();
        assert_eq!(default.keys().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(default["a"], TokenValue::Number(1.0));
    }

    #[test]
    fn nested_default_object_merges_with_scalars() {
        let model = parse_json(r#"{"flag": true, "Default": {"g": {"a": 1}}}"#).unwrap();
        let default = model.collection("Default").unwrap();
        assert_eq!(default.keys().collect::<Vec<_>>(), vec!["flag", "g/a"]);
    }

    #[test]
    fn scalars_after_flat_default_object_are_added() {
        let model = parse_json(r#"{"Default": {"a": 1}, "flag": true}"#).unwrap();
        assert_eq!(model.collection("Default").unwrap().len(), 2);
    }

    #[test]
    fn simple_empty_collection_is_kept() {
        let model = parse_json(r#"{"Empty": {}}"#).unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.token_count(), 0);
    }

    #[test]
    fn dtcg_tokens_are_named_below_collection() {
        let text = r##"{
            "$schema": "https://example.com/schema.json",
            "Colors": {
                "$description": "palette",
                "brand": {
                    "primary": {"$value": "#0066FF", "$type": "color"},
                    "secondary": {"$value": "rgb(255, 0, 0)"}
                }
            },
            "Spacing": {
                "sm": {"$value": "8px", "$type": "dimension"},
                "scale": {"$value": "1.5"},
                "enabled": {"$value": true}
            }
        }"##;
        let model = parse_json(text).unwrap();
        assert_eq!(model.collection_names().collect::<Vec<_>>(), vec!["Colors", "Spacing"]);
        assert_eq!(
            model.get("Colors", "brand/primary"),
            Some(&TokenValue::Color(Rgba::new(0.0, 102.0 / 255.0, 1.0, 1.0)))
        );
        assert_eq!(
            model.get("Colors", "brand/secondary"),
            Some(&TokenValue::Color(Rgba::new(1.0, 0.0, 0.0, 1.0)))
        );
        assert_eq!(model.get("Spacing", "sm"), Some(&TokenValue::String("8px".into())));
        assert_eq!(model.get("Spacing", "scale"), Some(&TokenValue::Number(1.5)));
        assert_eq!(model.get("Spacing", "enabled"), Some(&TokenValue::Boolean(true)));
    }

    #[test]
    fn dtcg_detection_is_document_wide() {
        // "Plain" has no $value, so under DTCG rules its scalars are ignored.
        let text = r#"{"Plain": {"a": "1"}, "Tokens": {"b": {"$value": "2"}}}"#;
        let model = parse_json(text).unwrap();
        assert!(model.collection("Plain").is_none());
        assert_eq!(model.get("Tokens", "b"), Some(&TokenValue::Number(2.0)));
    }

    #[test]
    fn dtcg_value_directly_under_collection_has_empty_name() {
        let model = parse_json(r#"{"Solo": {"$value": "4"}}"#).unwrap();
        assert_eq!(model.get("Solo", ""), Some(&TokenValue::Number(4.0)));
    }

    #[test]
    fn dtcg_value_at_root_goes_to_default() {
        let model = parse_json(r#"{"$value": "red"}"#).unwrap();
        assert_eq!(
            model.get("Default", ""),
            Some(&TokenValue::Color(Rgba::new(1.0, 0.0, 0.0, 1.0)))
        );
    }

    #[test]
    fn dtcg_composite_values_are_kept_as_json_text() {
        let text = r#"{"Fx": {"shadow": {"$value": {"x": 1, "y": 2}, "$type": "shadow"}}}"#;
        let model = parse_json(text).unwrap();
        assert_eq!(
            model.get("Fx", "shadow"),
            Some(&TokenValue::String(r#"{"x":1,"y":2}"#.into()))
        );
    }

    #[test]
    fn dtcg_arrays_use_index_segments() {
        let model = parse_json(r#"{"Steps": {"list": [{"$value": 1}, {"$value": 2}]}}"#).unwrap();
        assert_eq!(model.get("Steps", "list/1"), Some(&TokenValue::Number(2.0)));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let model = parse_json(r#"{"C": {"a": 1, "b": 2, "a": 3}}"#).unwrap();
        let c = model.collection("C").unwrap();
        assert_eq!(c["a"], TokenValue::Number(3.0));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn trailing_comma_is_invalid_syntax() {
        let err = parse_json(r#"{"C": {"a": 1,}}"#).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn empty_and_non_object_documents_are_empty_models() {
        assert!(parse_json("{}").unwrap().is_empty());
        assert!(parse_json("[1, 2]").unwrap().is_empty());
        assert!(parse_json("42").unwrap().is_empty());
    }

    #[test]
    fn empty_text_is_invalid_syntax() {
        assert_eq!(parse_json("").unwrap_err().kind, ParseErrorKind::InvalidSyntax);
    }
}
