//! End-to-end render pipeline tests over the shared fixtures

use ocre_contract::{RunRecord, Severity, ViewContract};
use ocre_render::{render_run, NodeBody};
use ocre_test_utils::{init_test_tracing, lp_contract, lp_run, raw_text_run};
use serde_json::json;

fn hero_contract() -> ViewContract {
    ViewContract::from_json_str(
        r#"{
            "mainContent": {
                "blocks": [
                    { "id": "c1", "renderer": "hero", "path": "$.finalOutput.core.oneLiner" }
                ]
            }
        }"#,
    )
    .unwrap()
}

#[test]
fn hero_block_renders_resolved_text() {
    init_test_tracing();
    let run = RunRecord::new("lp")
        .with_final_output(json!({ "core": { "oneLiner": "Buy now" } }));
    let out = render_run(Some(&hero_contract()), &run);
    assert_eq!(out.tree[0].id, "c1");
    assert!(out.tree[0].contains_text("Buy now"));
}

#[test]
fn hero_block_miss_degrades_to_placeholder() {
    init_test_tracing();
    let run = RunRecord::new("lp").with_final_output(json!({ "core": {} }));
    let out = render_run(Some(&hero_contract()), &run);
    assert!(out.tree[0].is_placeholder());
    assert!(out.tree[0].contains_text("not found"));
}

#[test]
fn no_contract_auto_visualizes_item_cards() {
    init_test_tracing();
    let run = RunRecord::new("x").with_final_output(json!({
        "title": "X",
        "items": [{ "name": "a" }, { "name": "b" }]
    }));
    let out = render_run(None, &run);
    assert_eq!(out.tree.len(), 1);
    assert!(out.tree[0].contains_text("a"));
    assert!(out.tree[0].contains_text("b"));

    fn card_count(body: &NodeBody) -> usize {
        match body {
            NodeBody::CardGroup { cards } => cards.len(),
            NodeBody::Group { children } => children.iter().map(|c| card_count(&c.body)).sum(),
            _ => 0,
        }
    }
    assert_eq!(card_count(&out.tree[0].body), 2);
}

#[test]
fn min_length_rule_warns_without_hiding_content() {
    init_test_tracing();
    let contract = ViewContract::from_json_str(
        r#"{
            "mainContent": {
                "blocks": [
                    { "id": "qs", "renderer": "bullets", "path": "questions" }
                ]
            },
            "rules": [
                { "kind": "minLength", "path": "questions", "min": 16 }
            ]
        }"#,
    )
    .unwrap();
    let questions: Vec<String> = (1..=10).map(|i| format!("Question {i}")).collect();
    let run = RunRecord::new("lp").with_final_output(json!({ "questions": questions }));

    let out = render_run(Some(&contract), &run);
    assert_eq!(out.violations.len(), 1);
    assert_eq!(out.violations[0].level, Severity::Warning);
    // All ten entries survive the violation
    for i in 1..=10 {
        assert!(out.tree[0].contains_text(&format!("Question {i}")));
    }
}

#[test]
fn fixture_contract_renders_every_declared_surface() {
    init_test_tracing();
    let out = render_run(Some(&lp_contract()), &lp_run());

    let ids: Vec<&str> = out.tree.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["summary", "one-liner", "structure", "questions", "proof"]
    );
    assert!(out.tree[0].contains_text("3 sections, 2 questions"));
    assert!(out.tree[1].contains_text("Ship landing pages in minutes"));
    assert!(out.tree[2].contains_text("FAQ"));
    assert!(out.tree[3].contains_text("What is the pricing model?"));

    // Two questions against a min of sixteen
    assert_eq!(out.violations.len(), 1);
    assert_eq!(out.violations[0].section_id.as_deref(), Some("questions"));
}

#[test]
fn raw_text_run_still_renders_under_contract() {
    init_test_tracing();
    let out = render_run(Some(&lp_contract()), &raw_text_run());
    // Every contract surface still appears, degraded where data is absent
    let ids: Vec<&str> = out.tree.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["summary", "one-liner", "structure", "questions", "proof"]
    );
    assert!(out.tree[0].contains_text("0 sections, 0 questions"));
    assert!(out
        .tree
        .iter()
        .any(|n| n.contains_text("Here is your landing page structure:")));
}

#[test]
fn raw_text_run_without_contract_is_a_paragraph() {
    init_test_tracing();
    let out = render_run(None, &raw_text_run());
    assert!(matches!(out.tree[0].body, NodeBody::Paragraph { .. }));
}

#[test]
fn empty_run_without_contract_is_an_empty_state() {
    init_test_tracing();
    let out = render_run(None, &RunRecord::new("x"));
    assert!(matches!(out.tree[0].body, NodeBody::EmptyState { .. }));
}

#[test]
fn malformed_block_renders_placeholder_among_healthy_ones() {
    init_test_tracing();
    let contract = ViewContract::from_json_str(
        r#"{
            "mainContent": {
                "blocks": [
                    { "id": "good", "renderer": "hero", "path": "core.oneLiner" },
                    { "id": "bad", "renderer": "cards" },
                    { "id": "alien", "renderer": "hologram" }
                ]
            }
        }"#,
    )
    .unwrap();
    let run = RunRecord::new("lp")
        .with_final_output(json!({ "core": { "oneLiner": "Fine" } }));
    let out = render_run(Some(&contract), &run);
    assert!(out.tree[0].contains_text("Fine"));
    assert!(out.tree[1].is_placeholder());
    assert!(out.tree[2].is_placeholder());
}

#[test]
fn render_output_serializes_for_the_host_ui() {
    init_test_tracing();
    let out = render_run(Some(&lp_contract()), &lp_run());
    let json = serde_json::to_value(&out).unwrap();
    assert!(json["tree"].is_array());
    assert_eq!(json["tree"][1]["id"], "one-liner");
    assert_eq!(json["violations"][0]["level"], "warning");
}
