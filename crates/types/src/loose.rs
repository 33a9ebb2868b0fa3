//! Helpers for reading loosely-typed JSON input.

use serde_json::Value;

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Arrays and objects both count as records; missing keys read as absent.
pub(crate) fn is_record(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Turns a single item, an array or an absent value into an ordered list of
/// truthy items.
pub(crate) fn arrayify(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None => Vec::new(),
        Some(v) if !is_truthy(v) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter(|item| is_truthy(item)).collect(),
        Some(v) => vec![v],
    }
}

/// Reads a string field, treating anything else as absent.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Reads a boolean field, treating anything else as absent.
pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}
