//! Path resolution against JSON values
//!
//! Resolution is total: every call returns a [`Resolution`], never an error
//! and never a panic. A miss carries a human-readable message that callers
//! surface as a small inline warning while the rest of the render pass
//! proceeds.

use crate::expr::PathExpr;
use serde_json::Value;

/// Result of resolving one path expression against one JSON value
///
/// Exactly one of the two sides is meaningful: a found value, or a
/// diagnostic message explaining the miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    value: Option<&'a Value>,
    error: Option<String>,
}

impl<'a> Resolution<'a> {
    /// A successful resolution
    #[inline]
    #[must_use]
    pub fn found(value: &'a Value) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// A miss, with a diagnostic message
    #[inline]
    #[must_use]
    pub fn missing(message: impl Into<String>) -> Self {
        Self {
            value: None,
            error: Some(message.into()),
        }
    }

    /// The resolved value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// The diagnostic message, if resolution missed
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a value was found
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

/// Resolve a path expression string against a JSON root
///
/// - `path: None` returns the root itself (identity case, used when a
///   section has no narrowing path).
/// - An optional `$.` prefix and the legacy `finalOutput.` wrapper prefix
///   are both honored; `a.b`, `$.a.b` and `finalOutput.a.b` agree wherever
///   the document shape makes more than one applicable.
/// - `context` names the section/block being rendered, for the diagnostic.
#[must_use]
pub fn resolve<'a>(root: &'a Value, path: Option<&str>, context: Option<&str>) -> Resolution<'a> {
    match path {
        None => Resolution::found(root),
        Some(p) => resolve_expr(root, &PathExpr::parse(p), context),
    }
}

/// Resolve a tokenized path expression against a JSON root
#[must_use]
pub fn resolve_expr<'a>(
    root: &'a Value,
    expr: &PathExpr,
    context: Option<&str>,
) -> Resolution<'a> {
    resolve_keys(root, expr.keys(), expr, context)
}

/// Resolve a key sequence, applying the legacy-wrapper fallbacks
///
/// Attempts, first hit wins:
/// 1. the keys as given;
/// 2. with a leading `finalOutput` key stripped (old contracts addressing a
///    new, unwrapped document);
/// 3. descending through a root-level `finalOutput` object (new contracts
///    addressing a wrapped document).
pub(crate) fn resolve_keys<'a>(
    root: &'a Value,
    keys: &[String],
    expr: &PathExpr,
    context: Option<&str>,
) -> Resolution<'a> {
    if keys.is_empty() {
        return Resolution::found(root);
    }

    if let Some(value) = walk(root, keys) {
        return Resolution::found(value);
    }

    if let Some(first) = keys.first() {
        if first == "finalOutput" {
            if let Some(value) = walk(root, &keys[1..]) {
                return Resolution::found(value);
            }
        } else if let Some(wrapped) = root.get("finalOutput") {
            if let Some(value) = walk(wrapped, keys) {
                return Resolution::found(value);
            }
        }
    }

    let message = match context {
        Some(ctx) => format!("path {} not found (section {ctx})", expr.raw()),
        None => format!("path {} not found", expr.raw()),
    };
    tracing::debug!(path = expr.raw(), context, "path resolution miss");
    Resolution::missing(message)
}

/// Walk a key sequence down the object graph
///
/// Objects descend by member name; arrays accept a plain numeric key
/// (bracket syntax stays unsupported). Anything else aborts the walk.
fn walk<'a>(root: &'a Value, keys: &[String]) -> Option<&'a Value> {
    let mut current = root;
    for key in keys {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
