//! Section rendering
//!
//! Sections are the secondary surfaces beneath the main content: summaries,
//! tables, card grids, checklists, and the raw/execution-proof diagnostic
//! tabs. The data-shaped kinds reuse the block strategies; the diagnostic
//! kinds read fixed slices of the run record instead of resolved paths.

use crate::dispatch::{definition_missing, render_cards, render_checklist, render_table};
use crate::node::{KeyValue, NodeBody, PresentationNode, TabView};
use crate::value::pretty_json;
use ocre_contract::{
    OutputDocument, RecordSlice, RunRecord, Section, SectionKind, SummarySpec, TabSpec,
};
use ocre_path::{expand, resolve, Resolution};
use serde_json::Value;

/// Render one secondary section against the run record and document
#[must_use]
pub fn render_section(
    section: &Section,
    run: &RunRecord,
    doc: &OutputDocument,
) -> PresentationNode {
    // A narrowing path scopes the data-shaped kinds; a path that misses
    // falls back to the whole document so sub-spec paths still get a chance,
    // but the miss is surfaced as an inline warning on the node.
    let scope = section
        .path
        .as_deref()
        .map(|p| resolve(doc.root(), Some(p), Some(&section.id)));
    let base = scope
        .as_ref()
        .and_then(Resolution::value)
        .unwrap_or_else(|| doc.root());
    let path_warning = scope
        .as_ref()
        .and_then(Resolution::error)
        .map(ToString::to_string);

    let body = match section.kind {
        SectionKind::Summary => match &section.summary {
            Some(spec) => summary(spec, base, &section.id),
            None => definition_missing("summary"),
        },
        SectionKind::Table => match &section.table {
            Some(spec) => render_table(spec, base, &section.id),
            None => definition_missing("table"),
        },
        SectionKind::Cards => match &section.cards {
            Some(spec) => render_cards(spec, base, &section.id),
            None => definition_missing("cards"),
        },
        SectionKind::Checklist => {
            let path = section
                .checklist
                .as_ref()
                .and_then(|c| c.path.as_deref())
                .or(section.path.as_deref());
            if path.is_none() && section.checklist.is_none() {
                definition_missing("checklist")
            } else {
                // The base already applied section.path; resolve the
                // checklist path against the full document instead.
                render_checklist(path, doc.root(), &section.id)
            }
        }
        SectionKind::Raw => tabs(
            section.tabs.as_deref(),
            &[
                RecordSlice::FinalOutput,
                RecordSlice::ParsedOutput,
                RecordSlice::RawOutput,
                RecordSlice::Validation,
            ],
            run,
            doc,
        ),
        SectionKind::ExecutionProof => tabs(
            section.tabs.as_deref(),
            &[
                RecordSlice::Validation,
                RecordSlice::RawOutput,
                RecordSlice::FinalOutput,
            ],
            run,
            doc,
        ),
        SectionKind::Unknown => NodeBody::Placeholder {
            reason: format!(
                "section type for '{}' is missing or not recognized",
                section.id
            ),
        },
    };

    let mut node = PresentationNode::new(section.id.clone(), body);
    if let Some(title) = &section.title {
        node = node.with_label(title.clone());
    }
    if let Some(warning) = path_warning {
        node = node.with_subtitle(warning);
    }
    node
}

/// Summary section: an expanded template line, labeled fields, or both
fn summary(spec: &SummarySpec, base: &Value, context: &str) -> NodeBody {
    let line = spec
        .template
        .as_deref()
        .map(|t| expand(t, base))
        .filter(|s| !s.is_empty());
    let entries: Vec<KeyValue> = spec
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label = field
                .label
                .clone()
                .or_else(|| field.effective_path().map(ToString::to_string))
                .unwrap_or_else(|| format!("field {}", i + 1));
            let res = resolve(base, field.effective_path(), Some(context));
            let value = match res.value() {
                Some(v) => crate::value::inline_text(v),
                None => res.error().unwrap_or("not found").to_string(),
            };
            KeyValue { label, value }
        })
        .collect();

    match (line, entries.is_empty()) {
        (Some(text), true) => NodeBody::Paragraph { text },
        (None, false) => NodeBody::KeyValueList { entries },
        (Some(text), false) => NodeBody::Group {
            children: vec![
                PresentationNode::new(
                    format!("{context}-line"),
                    NodeBody::Paragraph { text },
                ),
                PresentationNode::new(
                    format!("{context}-fields"),
                    NodeBody::KeyValueList { entries },
                ),
            ],
        },
        (None, true) => definition_missing("summary template or field"),
    }
}

/// Build the diagnostic tab set, honoring declared tabs when present
fn tabs(
    declared: Option<&[TabSpec]>,
    defaults: &[RecordSlice],
    run: &RunRecord,
    doc: &OutputDocument,
) -> NodeBody {
    let views = match declared.filter(|t| !t.is_empty()) {
        Some(specs) => specs
            .iter()
            .map(|spec| TabView {
                id: spec.id.clone(),
                label: spec
                    .label
                    .clone()
                    .unwrap_or_else(|| slice_label(spec.slice).to_string()),
                body: Box::new(slice_view(spec.slice, run, doc)),
            })
            .collect(),
        None => defaults
            .iter()
            .map(|&slice| TabView {
                id: slice_id(slice).to_string(),
                label: slice_label(slice).to_string(),
                body: Box::new(slice_view(slice, run, doc)),
            })
            .collect(),
    };
    NodeBody::Tabs { tabs: views }
}

const fn slice_id(slice: RecordSlice) -> &'static str {
    match slice {
        RecordSlice::FinalOutput => "final-output",
        RecordSlice::ParsedOutput => "parsed-output",
        RecordSlice::RawOutput => "raw-output",
        RecordSlice::Validation => "validation",
    }
}

const fn slice_label(slice: RecordSlice) -> &'static str {
    match slice {
        RecordSlice::FinalOutput => "Final output",
        RecordSlice::ParsedOutput => "Parsed output",
        RecordSlice::RawOutput => "Raw output",
        RecordSlice::Validation => "Validation",
    }
}

/// Render one fixed slice of the run record
fn slice_view(slice: RecordSlice, run: &RunRecord, doc: &OutputDocument) -> NodeBody {
    match slice {
        RecordSlice::FinalOutput => {
            let value = doc.final_output();
            if value.is_null() {
                NodeBody::EmptyState {
                    message: "no output stored".to_string(),
                }
            } else {
                NodeBody::CodeBlock {
                    language: Some("json".to_string()),
                    text: pretty_json(value),
                }
            }
        }
        RecordSlice::ParsedOutput => match &run.output.parsed_output {
            Some(value) => NodeBody::CodeBlock {
                language: Some("json".to_string()),
                text: pretty_json(value),
            },
            None => NodeBody::EmptyState {
                message: "no parsed output stored".to_string(),
            },
        },
        RecordSlice::RawOutput => match &run.output.raw_output {
            Some(text) => NodeBody::Paragraph { text: text.clone() },
            None => NodeBody::EmptyState {
                message: "no raw output stored".to_string(),
            },
        },
        RecordSlice::Validation => match &run.validation {
            Some(outcome) => {
                let mut items = vec![if outcome.passed {
                    "validation passed".to_string()
                } else {
                    "validation failed".to_string()
                }];
                items.extend(outcome.issues.iter().map(|issue| match &issue.path {
                    Some(path) => format!("{path}: {}", issue.message),
                    None => issue.message.clone(),
                }));
                NodeBody::BulletList { items }
            }
            None => NodeBody::EmptyState {
                message: "no validation recorded".to_string(),
            },
        },
    }
}
