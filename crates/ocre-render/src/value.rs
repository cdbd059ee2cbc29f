//! Display helpers for JSON values
//!
//! Shared stringification used by the rendering strategies. The guiding
//! rule: structured values are summarized or decomposed, never dumped as
//! raw JSON into prose positions.

use serde_json::Value;

/// Scalar display text; `None` for objects, arrays and null
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

/// One-line display text for any value
///
/// Scalars stringify; containers summarize by size instead of dumping.
pub(crate) fn inline_text(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(map) => format!("{} fields", map.len()),
        scalar => scalar_text(scalar).unwrap_or_default(),
    }
}

/// Multi-line display text: objects become `key: value` lines, arrays
/// become one line per element, scalars a single line
pub(crate) fn value_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {}", inline_text(v)))
            .collect(),
        Value::Array(items) => items.iter().map(inline_text).collect(),
        other => vec![inline_text(other)],
    }
}

/// Pretty-printed JSON for diagnostic (raw-data) positions only
pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Pick a card title from an item's conventional naming keys
pub(crate) fn item_title(item: &Value, index: usize) -> String {
    for key in ["title", "name", "label", "id", "heading"] {
        if let Some(text) = item.get(key).and_then(scalar_text) {
            return text;
        }
    }
    format!("Item {}", index + 1)
}
