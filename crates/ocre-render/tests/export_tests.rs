//! Markdown export parity with the interactive render tree

use ocre_render::{export_markdown, render_run, NodeBody, PresentationNode};
use ocre_test_utils::{init_test_tracing, lp_contract, lp_run, raw_text_run};

/// Collect every visible text fragment of a node, in tree order
fn texts(node: &PresentationNode, out: &mut Vec<String>) {
    if let Some(label) = &node.label {
        out.push(label.clone());
    }
    body_texts(&node.body, out);
}

fn body_texts(body: &NodeBody, out: &mut Vec<String>) {
    match body {
        NodeBody::Hero { text }
        | NodeBody::Paragraph { text }
        | NodeBody::CodeBlock { text, .. }
        | NodeBody::MarkdownText { text, .. } => out.push(text.clone()),
        NodeBody::BulletList { items } => out.extend(items.iter().cloned()),
        NodeBody::Checklist { items } => out.extend(items.iter().map(|i| i.text.clone())),
        NodeBody::KeyValueList { entries } => {
            out.extend(entries.iter().map(|e| e.value.clone()));
        }
        NodeBody::Table { columns, rows } => {
            out.extend(columns.iter().cloned());
            out.extend(rows.iter().flatten().cloned());
        }
        NodeBody::CardGroup { cards } => {
            for card in cards {
                out.push(card.title.clone());
                out.extend(card.fields.iter().map(|f| f.value.clone()));
                if let Some(body) = &card.body {
                    out.push(body.clone());
                }
            }
        }
        NodeBody::Tabs { tabs } => {
            for tab in tabs {
                out.push(tab.label.clone());
                body_texts(&tab.body, out);
            }
        }
        NodeBody::Group { children } => {
            for child in children {
                texts(child, out);
            }
        }
        NodeBody::Placeholder { reason } => out.push(reason.clone()),
        NodeBody::EmptyState { message } => out.push(message.clone()),
    }
}

#[test]
fn export_carries_every_tree_text_in_order() {
    init_test_tracing();
    let contract = lp_contract();
    let run = lp_run();

    let rendered = render_run(Some(&contract), &run);
    let md = export_markdown(Some(&contract), &run);

    let mut fragments = Vec::new();
    for node in &rendered.tree {
        texts(node, &mut fragments);
    }
    // Every fragment appears, and in tree order
    let mut cursor = 0;
    for fragment in &fragments {
        let found = md[cursor..]
            .find(fragment.as_str())
            .unwrap_or_else(|| panic!("fragment {fragment:?} missing or out of order"));
        cursor += found;
    }
}

#[test]
fn export_leads_with_contract_title_and_violations() {
    init_test_tracing();
    let md = export_markdown(Some(&lp_contract()), &lp_run());
    assert!(md.starts_with("# LP Structure Proposal\n"));
    assert!(md.contains("`landing-page`"));
    assert!(md.contains("> ⚠ expected at least 16 items at questions, found 2"));
}

#[test]
fn export_without_contract_uses_agent_id() {
    init_test_tracing();
    let md = export_markdown(None, &raw_text_run());
    assert!(md.starts_with("# lp-structure\n"));
    assert!(md.contains("Here is your landing page structure:"));
}

#[test]
fn export_checklist_and_table_syntax() {
    init_test_tracing();
    let md = export_markdown(Some(&lp_contract()), &lp_run());
    assert!(md.contains("- [x] What is the pricing model?"));
    assert!(md.contains("| Section | Purpose |"));
    assert!(md.contains("| Hero | hook the visitor |"));
}

#[test]
fn export_is_deterministic() {
    init_test_tracing();
    let contract = lp_contract();
    let run = lp_run();
    assert_eq!(
        export_markdown(Some(&contract), &run),
        export_markdown(Some(&contract), &run)
    );
}
