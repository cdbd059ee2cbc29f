//! Template expansion for human-readable strings
//!
//! Expands `{{expr}}` placeholders inside contract-authored template
//! strings (subtitles, summary lines). Output is always a string; expansion
//! never fails.
//!
//! Substitution policy, in priority order:
//!
//! 1. `{{path.length}}` — array length of the value at `path`, `"0"` when
//!    the value is absent or not an array.
//! 2. `{{items[0].name}}` — bracketed element indexing is suppressed to the
//!    empty string. Inlining an arbitrary element's stringified value into a
//!    subtitle causes uncontrolled verbosity, so this is policy, not a
//!    resolver limitation.
//! 3. Anything else — scalars stringified; objects and arrays suppressed
//!    (structured data belongs in blocks, not prose); null/missing empty.

use crate::expr::PathExpr;
use crate::resolve::resolve_keys;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

/// `{{expr}}` placeholder scanner (no nested braces)
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("placeholder regex is valid"));

/// Expand every `{{expr}}` placeholder in `template` against `root`
#[must_use]
pub fn expand(template: &str, root: &Value) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            substitute(&caps[1], root)
        })
        .into_owned()
}

/// Compute the substitution for one placeholder expression
fn substitute(raw: &str, root: &Value) -> String {
    let expr = PathExpr::parse(raw);

    if expr.wants_length() {
        let target = resolve_keys(root, expr.length_target(), &expr, None);
        return match target.value() {
            Some(Value::Array(items)) => items.len().to_string(),
            _ => "0".to_string(),
        };
    }

    if expr.has_index() {
        return String::new();
    }

    match resolve_keys(root, expr.keys(), &expr, None).value() {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        // Objects and arrays never inline into prose; null renders empty
        Some(Value::Object(_) | Value::Array(_) | Value::Null) | None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expand_scalar() {
        let root = json!({ "title": "Launch LP" });
        assert_eq!(expand("Page: {{title}}", &root), "Page: Launch LP");
    }

    #[test]
    fn expand_number_and_bool() {
        let root = json!({ "count": 3, "live": true });
        assert_eq!(expand("{{count}} / {{live}}", &root), "3 / true");
    }

    #[test]
    fn expand_length_of_array() {
        let root = json!({ "arr": [1, 2, 3] });
        assert_eq!(expand("{{arr.length}}", &root), "3");
    }

    #[test]
    fn expand_length_of_missing_is_zero() {
        let root = json!({});
        assert_eq!(expand("{{arr.length}}", &root), "0");
    }

    #[test]
    fn expand_length_of_non_array_is_zero() {
        let root = json!({ "arr": "not an array" });
        assert_eq!(expand("{{arr.length}}", &root), "0");
    }

    #[test]
    fn expand_suppresses_indexed_elements() {
        let root = json!({ "items": [{ "name": "a" }] });
        assert_eq!(expand("{{items[0].name}}", &root), "");
    }

    #[test]
    fn expand_suppresses_objects_and_arrays() {
        let root = json!({ "obj": { "k": 1 }, "arr": [1, 2] });
        assert_eq!(expand("[{{obj}}] [{{arr}}]", &root), "[] []");
    }

    #[test]
    fn expand_missing_and_null_are_empty() {
        let root = json!({ "gone": null });
        assert_eq!(expand("<{{gone}}><{{absent}}>", &root), "<><>");
    }

    #[test]
    fn expand_multiple_placeholders() {
        let root = json!({ "a": "x", "qs": [1, 2] });
        assert_eq!(expand("{{a}} has {{qs.length}} questions", &root), "x has 2 questions");
    }

    #[test]
    fn expand_without_placeholders_is_identity() {
        let root = json!({});
        assert_eq!(expand("plain text", &root), "plain text");
    }

    #[test]
    fn expand_resolves_through_legacy_wrapper() {
        let root = json!({ "finalOutput": { "title": "T" } });
        assert_eq!(expand("{{title}}", &root), "T");
        assert_eq!(expand("{{finalOutput.title}}", &root), "T");
    }
}
