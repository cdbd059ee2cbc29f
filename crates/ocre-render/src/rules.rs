//! Structural rule evaluation
//!
//! Rules are advisory quality hints over the normalized document: array
//! length bounds a contract author expects the agent to satisfy. A
//! violation annotates the render output and never removes or replaces
//! content. Rules over paths that do not resolve to arrays are skipped
//! silently; a length mismatch is a quality signal, a shape mismatch is
//! just a stale rule.

use ocre_contract::{OutputDocument, Rule, RuleKind, Severity};
use ocre_path::resolve;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One rule violation attached to a render output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleViolation {
    /// Severity level
    pub level: Severity,
    /// Human-readable description
    pub message: String,
    /// Section the violation attaches to, when declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
}

/// Evaluate all rules against the document
///
/// At most one violation per rule. Unknown rule kinds and rules whose path
/// does not resolve to an array produce nothing.
#[must_use]
pub fn evaluate(rules: &[Rule], doc: &OutputDocument) -> Vec<RuleViolation> {
    rules
        .iter()
        .filter_map(|rule| check(rule, doc.root()))
        .collect()
}

fn check(rule: &Rule, root: &Value) -> Option<RuleViolation> {
    if rule.kind == RuleKind::Unknown {
        return None;
    }
    let len = match resolve(root, Some(&rule.path), None).value() {
        Some(Value::Array(items)) => items.len(),
        _ => {
            tracing::debug!(path = %rule.path, "rule target is not an array, skipping");
            return None;
        }
    };

    let failed_min = rule.min.is_some_and(|min| len < min);
    let failed_max = rule.max.is_some_and(|max| len > max);
    let breached = match rule.kind {
        RuleKind::MinLength => failed_min,
        RuleKind::MaxLength => failed_max,
        RuleKind::RangeLength => failed_min || failed_max,
        RuleKind::Unknown => false,
    };
    if !breached {
        return None;
    }

    let message = rule.message.clone().unwrap_or_else(|| {
        if failed_min {
            let min = rule.min.unwrap_or_default();
            format!("expected at least {min} items at {}, found {len}", rule.path)
        } else {
            let max = rule.max.unwrap_or_default();
            format!("expected at most {max} items at {}, found {len}", rule.path)
        }
    });
    Some(RuleViolation {
        level: rule.level.unwrap_or(Severity::Warning),
        message,
        section_id: rule.section_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> OutputDocument {
        OutputDocument::from_value(value)
    }

    fn min_rule(path: &str, min: usize) -> Rule {
        Rule {
            kind: RuleKind::MinLength,
            path: path.to_string(),
            min: Some(min),
            ..Rule::default()
        }
    }

    #[test]
    fn min_length_violation_with_default_message() {
        let doc = doc(json!({ "questions": ["a", "b"] }));
        let violations = evaluate(&[min_rule("questions", 16)], &doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].level, Severity::Warning);
        assert_eq!(
            violations[0].message,
            "expected at least 16 items at questions, found 2"
        );
    }

    #[test]
    fn satisfied_rule_produces_nothing() {
        let doc = doc(json!({ "questions": [1, 2, 3] }));
        assert!(evaluate(&[min_rule("questions", 2)], &doc).is_empty());
    }

    #[test]
    fn max_length_violation() {
        let doc = doc(json!({ "ctas": [1, 2, 3, 4] }));
        let rule = Rule {
            kind: RuleKind::MaxLength,
            path: "ctas".to_string(),
            max: Some(2),
            ..Rule::default()
        };
        let violations = evaluate(&[rule], &doc);
        assert_eq!(
            violations[0].message,
            "expected at most 2 items at ctas, found 4"
        );
    }

    #[test]
    fn range_length_reports_one_violation_per_rule() {
        let doc = doc(json!({ "items": [] }));
        let rule = Rule {
            kind: RuleKind::RangeLength,
            path: "items".to_string(),
            min: Some(1),
            max: Some(5),
            ..Rule::default()
        };
        assert_eq!(evaluate(&[rule], &doc).len(), 1);
    }

    #[test]
    fn unresolvable_path_is_skipped_silently() {
        let doc = doc(json!({}));
        assert!(evaluate(&[min_rule("missing", 1)], &doc).is_empty());
    }

    #[test]
    fn non_array_target_is_skipped_silently() {
        let doc = doc(json!({ "questions": "not an array" }));
        assert!(evaluate(&[min_rule("questions", 1)], &doc).is_empty());
    }

    #[test]
    fn unknown_rule_kind_is_ignored() {
        let doc = doc(json!({ "items": [] }));
        let rule = Rule {
            path: "items".to_string(),
            min: Some(1),
            ..Rule::default()
        };
        assert!(evaluate(&[rule], &doc).is_empty());
    }

    #[test]
    fn overrides_apply() {
        let doc = doc(json!({ "items": [] }));
        let rule = Rule {
            kind: RuleKind::MinLength,
            path: "items".to_string(),
            min: Some(3),
            level: Some(Severity::Error),
            section_id: Some("qs".to_string()),
            message: Some("needs at least three".to_string()),
            ..Rule::default()
        };
        let violations = evaluate(&[rule], &doc);
        assert_eq!(violations[0].level, Severity::Error);
        assert_eq!(violations[0].section_id.as_deref(), Some("qs"));
        assert_eq!(violations[0].message, "needs at least three");
    }

    #[test]
    fn rule_path_sees_through_wrapper() {
        let doc = doc(json!({ "finalOutput": { "questions": [1] } }));
        let violations = evaluate(&[min_rule("questions", 2)], &doc);
        assert_eq!(violations.len(), 1);
    }
}
