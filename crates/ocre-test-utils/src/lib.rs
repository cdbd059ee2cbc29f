//! Testing utilities for the OCRE workspace
//!
//! Shared fixtures and helpers: a representative landing-page agent
//! contract, matching run records, and tracing setup for tests.

#![allow(missing_docs)]

use ocre_contract::{RunRecord, ValidationIssue, ValidationOutcome, ViewContract};
use serde_json::{json, Value};

/// Install a compact tracing subscriber for a test, honoring `RUST_LOG`
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .compact()
        .try_init();
}

/// A representative landing-page structure contract, with every section
/// kind the engine supports
pub fn lp_contract() -> ViewContract {
    ViewContract::from_json_str(
        r#"{
            "id": "lp-structure",
            "version": "3",
            "title": "LP Structure Proposal",
            "badges": ["landing-page"],
            "summary": "{{sections.length}} sections, {{questions.length}} questions",
            "mainContent": {
                "blocks": [
                    {
                        "id": "one-liner",
                        "label": "One-liner",
                        "renderer": "hero",
                        "path": "$.finalOutput.core.oneLiner"
                    },
                    {
                        "id": "structure",
                        "label": "Page structure",
                        "renderer": "table",
                        "table": {
                            "rowsPath": "sections",
                            "columns": [
                                { "label": "Section", "key": "label" },
                                { "label": "Purpose", "key": "purpose" }
                            ]
                        }
                    }
                ]
            },
            "sections": [
                {
                    "id": "questions",
                    "title": "Open questions",
                    "type": "checklist",
                    "checklist": { "path": "questions" }
                },
                { "id": "proof", "title": "Execution proof", "type": "executionProof" }
            ],
            "rules": [
                { "kind": "minLength", "path": "questions", "min": 16, "sectionId": "questions" }
            ]
        }"#,
    )
    .expect("fixture contract is valid")
}

/// Output matching [`lp_contract`], with too few questions so the
/// min-length rule fires
pub fn lp_output() -> Value {
    json!({
        "core": { "oneLiner": "Ship landing pages in minutes" },
        "sections": [
            { "label": "Hero", "purpose": "hook the visitor" },
            { "label": "Features", "purpose": "show value" },
            { "label": "FAQ", "purpose": "answer objections" }
        ],
        "questions": ["What is the pricing model?", "Who is the primary audience?"]
    })
}

/// A succeeded run with [`lp_output`] as validated output
pub fn lp_run() -> RunRecord {
    RunRecord::new("lp-structure")
        .with_final_output(lp_output())
        .with_validation(ValidationOutcome {
            passed: true,
            issues: vec![],
        })
}

/// A failed run with only raw, non-JSON LLM text
pub fn raw_text_run() -> RunRecord {
    RunRecord::new("lp-structure")
        .with_raw_output("Here is your landing page structure:\n1. Hero\n2. Features")
        .with_validation(ValidationOutcome {
            passed: false,
            issues: vec![ValidationIssue {
                path: None,
                message: "output is not valid JSON".to_string(),
            }],
        })
}
