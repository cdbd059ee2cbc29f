//! Path expression tokenization
//!
//! Provides [`PathExpr`], the tokenized form of a path expression string.
//! Tokenization never fails: contracts are user-edited and only loosely
//! checked, so a malformed path becomes a runtime resolution miss rather
//! than a parse-time rejection.

use std::fmt::{self, Display, Formatter};

/// Optional JSONPath-style prefix stripped from incoming expressions
const ROOT_PREFIX: &str = "$.";

/// Legacy wrapper prefix from older stored documents
const LEGACY_PREFIX: &str = "finalOutput";

/// A tokenized path expression
///
/// The grammar is a flat dot-separated key sequence with two recognized
/// decorations:
///
/// - an optional `$.` prefix (stripped)
/// - a trailing `.length` suffix (kept as a key, but flagged so the
///   template expander can treat it as an array-length request)
///
/// Bracketed array indexing (`items[0]`) is not part of the grammar; the
/// expression is flagged so callers can apply their suppression policy.
///
/// # Examples
/// - `"$.finalOutput.core.oneLiner"` → keys `["finalOutput", "core", "oneLiner"]`
/// - `"questions.length"` → keys `["questions", "length"]`, length-flagged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    raw: String,
    keys: Vec<String>,
    wants_length: bool,
    has_index: bool,
}

impl PathExpr {
    /// Tokenize a path expression string
    ///
    /// Never fails. Empty segments (doubled dots, a bare `$.`) are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix(ROOT_PREFIX).unwrap_or(trimmed);
        let keys: Vec<String> = body
            .split('.')
            .filter(|seg| !seg.is_empty())
            .map(ToString::to_string)
            .collect();

        Self {
            raw: raw.to_string(),
            wants_length: keys.last().is_some_and(|k| k == "length") && keys.len() > 1,
            has_index: body.contains('[') && body.contains(']'),
            keys,
        }
    }

    /// The original expression string, as authored
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Key sequence, root to leaf
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Whether the expression ends in a `.length` suffix
    #[inline]
    #[must_use]
    pub fn wants_length(&self) -> bool {
        self.wants_length
    }

    /// Whether the expression uses bracketed index syntax
    #[inline]
    #[must_use]
    pub fn has_index(&self) -> bool {
        self.has_index
    }

    /// Key sequence with the trailing `length` key removed
    ///
    /// Identical to [`keys`](Self::keys) when the expression carries no
    /// `.length` suffix.
    #[inline]
    #[must_use]
    pub fn length_target(&self) -> &[String] {
        if self.wants_length {
            &self.keys[..self.keys.len() - 1]
        } else {
            &self.keys
        }
    }

    /// Whether the first key is the legacy `finalOutput` wrapper
    #[inline]
    #[must_use]
    pub fn starts_with_legacy_prefix(&self) -> bool {
        self.keys.first().is_some_and(|k| k == LEGACY_PREFIX)
    }

    /// Key sequence with the leading legacy wrapper key removed
    ///
    /// Returns `None` when the expression does not start with it.
    #[must_use]
    pub fn without_legacy_prefix(&self) -> Option<&[String]> {
        if self.starts_with_legacy_prefix() {
            Some(&self.keys[1..])
        } else {
            None
        }
    }

    /// Whether the expression is empty (resolves to the root itself)
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Display for PathExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for PathExpr {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        let expr = PathExpr::parse("a.b.c");
        assert_eq!(expr.keys(), &["a", "b", "c"]);
        assert!(!expr.wants_length());
        assert!(!expr.has_index());
    }

    #[test]
    fn parse_strips_root_prefix() {
        let expr = PathExpr::parse("$.a.b");
        assert_eq!(expr.keys(), &["a", "b"]);
        assert_eq!(expr.raw(), "$.a.b");
    }

    #[test]
    fn parse_length_suffix() {
        let expr = PathExpr::parse("questions.length");
        assert!(expr.wants_length());
        assert_eq!(expr.length_target(), &["questions"]);
        // The full key sequence still carries the suffix for plain resolution
        assert_eq!(expr.keys(), &["questions", "length"]);
    }

    #[test]
    fn bare_length_is_a_key() {
        // A one-segment "length" is a field name, not a suffix
        let expr = PathExpr::parse("length");
        assert!(!expr.wants_length());
        assert_eq!(expr.keys(), &["length"]);
    }

    #[test]
    fn parse_index_syntax_flagged() {
        let expr = PathExpr::parse("items[0].name");
        assert!(expr.has_index());
    }

    #[test]
    fn parse_legacy_prefix() {
        let expr = PathExpr::parse("finalOutput.a.b");
        assert!(expr.starts_with_legacy_prefix());
        assert_eq!(expr.without_legacy_prefix().unwrap(), &["a", "b"]);
    }

    #[test]
    fn parse_empty_and_degenerate() {
        assert!(PathExpr::parse("").is_root());
        assert!(PathExpr::parse("$.").is_root());
        let expr = PathExpr::parse("a..b");
        assert_eq!(expr.keys(), &["a", "b"]);
    }

    #[test]
    fn display_preserves_raw() {
        let expr = PathExpr::parse("$.a.b ");
        assert_eq!(expr.to_string(), "$.a.b ");
    }
}
