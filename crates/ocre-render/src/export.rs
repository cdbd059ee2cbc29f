//! Markdown export
//!
//! Serializes a render pass to a self-contained markdown document. The
//! exporter walks the same presentation tree the interactive view shows,
//! in the same order with the same content; it adds no information and
//! drops none, so the two surfaces can never disagree.

use crate::engine::{render_run, RenderOutput};
use crate::node::{NodeBody, PresentationNode};
use crate::rules::RuleViolation;
use ocre_contract::{RunRecord, Severity, ViewContract};
use std::fmt::Write;

/// Render a run and serialize the result as markdown
#[must_use]
pub fn export_markdown(contract: Option<&ViewContract>, run: &RunRecord) -> String {
    let output = render_run(contract, run);
    let title = contract
        .and_then(|c| c.title.as_deref())
        .unwrap_or(&run.agent_id);
    let badges = contract.map(|c| c.badges.as_slice()).unwrap_or_default();
    write_document(&output, title, badges)
}

/// Serialize an already-rendered output as markdown
#[must_use]
pub fn write_document(output: &RenderOutput, title: &str, badges: &[String]) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# {title}");
    if !badges.is_empty() {
        let line: Vec<String> = badges.iter().map(|b| format!("`{b}`")).collect();
        let _ = writeln!(md, "\n{}", line.join(" "));
    }
    for violation in &output.violations {
        let _ = writeln!(md, "\n{}", violation_line(violation));
    }
    for node in &output.tree {
        write_node(&mut md, node, 2);
    }
    md
}

fn violation_line(violation: &RuleViolation) -> String {
    let marker = match violation.level {
        Severity::Warning => "⚠",
        Severity::Error => "✖",
    };
    format!("> {marker} {}", violation.message)
}

fn write_node(md: &mut String, node: &PresentationNode, depth: usize) {
    let heading = "#".repeat(depth.min(6));
    if let Some(label) = &node.label {
        let _ = writeln!(md, "\n{heading} {label}");
    }
    if let Some(subtitle) = &node.subtitle {
        let _ = writeln!(md, "\n_{subtitle}_");
    }
    write_body(md, &node.body, depth);
}

#[allow(clippy::too_many_lines)]
fn write_body(md: &mut String, body: &NodeBody, depth: usize) {
    let sub = "#".repeat((depth + 1).min(6));
    match body {
        NodeBody::Hero { text } => {
            for line in text.lines() {
                let _ = writeln!(md, "\n**{line}**");
            }
        }
        NodeBody::Paragraph { text } => {
            let _ = writeln!(md, "\n{text}");
        }
        NodeBody::BulletList { items } => {
            let _ = writeln!(md);
            for item in items {
                let _ = writeln!(md, "- {item}");
            }
        }
        NodeBody::Checklist { items } => {
            let _ = writeln!(md);
            for item in items {
                let mark = if item.checked { "x" } else { " " };
                let _ = writeln!(md, "- [{mark}] {}", item.text);
            }
        }
        NodeBody::KeyValueList { entries } => {
            let _ = writeln!(md);
            for entry in entries {
                let _ = writeln!(md, "- **{}:** {}", entry.label, entry.value);
            }
        }
        NodeBody::Table { columns, rows } => {
            let _ = writeln!(md, "\n| {} |", columns.join(" | "));
            let _ = writeln!(md, "|{}", " --- |".repeat(columns.len()));
            for row in rows {
                let _ = writeln!(md, "| {} |", row.join(" | "));
            }
        }
        NodeBody::CardGroup { cards } => {
            for card in cards {
                let _ = writeln!(md, "\n{sub} {}", card.title);
                if let Some(subtitle) = &card.subtitle {
                    let _ = writeln!(md, "\n_{subtitle}_");
                }
                if !card.fields.is_empty() {
                    let _ = writeln!(md);
                    for field in &card.fields {
                        let _ = writeln!(md, "- **{}:** {}", field.label, field.value);
                    }
                }
                if let Some(body) = &card.body {
                    let _ = writeln!(md, "\n{body}");
                }
            }
        }
        NodeBody::CodeBlock { language, text } => {
            let lang = language.as_deref().unwrap_or_default();
            let _ = writeln!(md, "\n```{lang}\n{text}\n```");
        }
        NodeBody::MarkdownText { text, .. } => {
            let _ = writeln!(md, "\n{text}");
        }
        NodeBody::Tabs { tabs } => {
            for tab in tabs {
                let _ = writeln!(md, "\n{sub} {}", tab.label);
                write_body(md, &tab.body, depth + 1);
            }
        }
        NodeBody::Group { children } => {
            for child in children {
                write_node(md, child, depth + 1);
            }
        }
        NodeBody::Placeholder { reason } => {
            let _ = writeln!(md, "\n> ⚠ {reason}");
        }
        NodeBody::EmptyState { message } => {
            let _ = writeln!(md, "\n_{message}_");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Card, ChecklistItem, KeyValue};

    fn output_with(body: NodeBody) -> RenderOutput {
        RenderOutput {
            tree: vec![PresentationNode::new("n", body).with_label("Node")],
            violations: Vec::new(),
        }
    }

    #[test]
    fn document_leads_with_title_and_badges() {
        let md = write_document(
            &RenderOutput {
                tree: vec![],
                violations: vec![],
            },
            "LP Structure",
            &["lp".to_string(), "v3".to_string()],
        );
        assert!(md.starts_with("# LP Structure\n"));
        assert!(md.contains("`lp` `v3`"));
    }

    #[test]
    fn violations_become_blockquotes() {
        let output = RenderOutput {
            tree: vec![],
            violations: vec![RuleViolation {
                level: Severity::Warning,
                message: "expected at least 16 items at questions, found 2".to_string(),
                section_id: None,
            }],
        };
        let md = write_document(&output, "T", &[]);
        assert!(md.contains("> ⚠ expected at least 16 items at questions, found 2"));
    }

    #[test]
    fn checklist_serializes_task_list_syntax() {
        let md = write_document(
            &output_with(NodeBody::Checklist {
                items: vec![
                    ChecklistItem {
                        text: "Q1".to_string(),
                        checked: true,
                    },
                    ChecklistItem {
                        text: "Q2".to_string(),
                        checked: false,
                    },
                ],
            }),
            "T",
            &[],
        );
        assert!(md.contains("- [x] Q1"));
        assert!(md.contains("- [ ] Q2"));
    }

    #[test]
    fn table_serializes_pipe_syntax() {
        let md = write_document(
            &output_with(NodeBody::Table {
                columns: vec!["Section".to_string(), "Count".to_string()],
                rows: vec![vec!["Hero".to_string(), "1".to_string()]],
            }),
            "T",
            &[],
        );
        assert!(md.contains("| Section | Count |"));
        assert!(md.contains("| --- | --- |"));
        assert!(md.contains("| Hero | 1 |"));
    }

    #[test]
    fn code_block_keeps_language_hint() {
        let md = write_document(
            &output_with(NodeBody::CodeBlock {
                language: Some("mermaid".to_string()),
                text: "graph TD; A-->B".to_string(),
            }),
            "T",
            &[],
        );
        assert!(md.contains("```mermaid\ngraph TD; A-->B\n```"));
    }

    #[test]
    fn cards_nest_one_heading_deeper() {
        let md = write_document(
            &output_with(NodeBody::CardGroup {
                cards: vec![Card {
                    title: "Variant A".to_string(),
                    subtitle: Some("bold".to_string()),
                    fields: vec![KeyValue {
                        label: "Score".to_string(),
                        value: "9".to_string(),
                    }],
                    body: None,
                }],
            }),
            "T",
            &[],
        );
        assert!(md.contains("### Variant A"));
        assert!(md.contains("- **Score:** 9"));
    }

    #[test]
    fn export_matches_render_tree_content() {
        use ocre_contract::{Block, MainContent, RendererKind};
        use serde_json::json;

        let contract = ViewContract {
            title: Some("Proposal".to_string()),
            main_content: Some(MainContent {
                title: None,
                blocks: vec![Block {
                    id: "h".to_string(),
                    label: Some("One-liner".to_string()),
                    renderer: RendererKind::Hero,
                    path: Some("core.oneLiner".to_string()),
                    ..Block::default()
                }],
            }),
            ..ViewContract::default()
        };
        let run = RunRecord::new("lp")
            .with_final_output(json!({ "core": { "oneLiner": "Ship faster" } }));
        let md = export_markdown(Some(&contract), &run);
        let rendered = render_run(Some(&contract), &run);
        // Every text the tree carries appears in the export
        assert!(rendered.tree[0].contains_text("Ship faster"));
        assert!(md.contains("Ship faster"));
        assert!(md.contains("## One-liner"));
    }
}
