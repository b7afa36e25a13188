//! Token values to store-native values.

use tokenport_core::{is_color, to_rgba, Rgba, TokenValue};
use tokenport_storage::{ColorValue, StoreValue, VariableType};

/// The variable type a token is created as.
///
/// Strings that look like colors become COLOR variables; this is how simple
/// JSON, which keeps strings uncoerced, still imports colors.
pub fn resolve_variable_type(value: &TokenValue) -> VariableType {
    match value {
        TokenValue::Boolean(_) => VariableType::Boolean,
        TokenValue::Number(_) => VariableType::Float,
        TokenValue::Color(_) => VariableType::Color,
        TokenValue::String(s) if is_color(s) => VariableType::Color,
        TokenValue::String(_) => VariableType::String,
    }
}

/// The value written to the store. Agrees with [`resolve_variable_type`].
pub fn to_store_value(value: &TokenValue) -> StoreValue {
    match value {
        TokenValue::Boolean(b) => StoreValue::Boolean(*b),
        TokenValue::Number(n) => StoreValue::Float(*n),
        TokenValue::Color(c) => StoreValue::Color(color_value(*c)),
        TokenValue::String(s) if is_color(s) => StoreValue::Color(color_value(to_rgba(s))),
        TokenValue::String(s) => StoreValue::String(s.clone()),
    }
}

fn color_value(c: Rgba) -> ColorValue {
    ColorValue {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}
