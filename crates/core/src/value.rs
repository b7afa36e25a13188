//! Typed token values and string coercion.

use serde::{Deserialize, Serialize};

use crate::color::{is_color, to_rgba, Rgba};

/// A typed design-token value.
///
/// Serialized untagged: booleans, numbers and strings as the matching JSON
/// scalar, colors as an `{r, g, b, a}` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TokenValue {
    Boolean(bool),
    Number(f64),
    Color(Rgba),
    String(String),
}

impl TokenValue {
    /// Convert an already-typed JSON value without coercing strings.
    ///
    /// `null` has no token representation and yields `None`. Arrays and
    /// objects are kept as their compact JSON text.
    pub fn from_json(value: &serde_json::Value) -> Option<TokenValue> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(TokenValue::Boolean(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(TokenValue::Number),
            serde_json::Value::String(s) => Some(TokenValue::String(s.clone())),
            composite => Some(TokenValue::String(composite.to_string())),
        }
    }

    /// Like [`TokenValue::from_json`], but strings go through [`coerce`].
    pub fn from_json_coerced(value: &serde_json::Value) -> Option<TokenValue> {
        match value {
            serde_json::Value::String(s) => Some(coerce(s)),
            other => TokenValue::from_json(other),
        }
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        TokenValue::Boolean(b)
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

impl From<Rgba> for TokenValue {
    fn from(c: Rgba) -> Self {
        TokenValue::Color(c)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::String(s.to_owned())
    }
}

/// Infer the most specific value for a raw string.
///
/// Rules, first match wins: `true`/`false` in any case, then a color
/// ([`is_color`]), then a finite number that carries no `px`/`em` unit,
/// else the string unchanged. The input is not trimmed, so `" 4"` stays a
/// string.
pub fn coerce(raw: &str) -> TokenValue {
    if raw.eq_ignore_ascii_case("true") {
        return TokenValue::Boolean(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return TokenValue::Boolean(false);
    }
    if is_color(raw) {
        return TokenValue::Color(to_rgba(raw));
    }
    if !raw.contains("px") && !raw.contains("em") {
        if let Some(n) = parse_finite(raw) {
            return TokenValue::Number(n);
        }
    }
    TokenValue::String(raw.to_owned())
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}
