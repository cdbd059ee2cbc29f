//! Block renderer dispatch
//!
//! Tagged-union dispatch from a block's `renderer` discriminator to one
//! pure rendering function. Adding a new block kind means adding one
//! variant and one function.
//!
//! Every strategy upholds the same discipline: tolerate an absent value, a
//! wrong runtime type, and a resolution miss, and answer each with a
//! placeholder node carrying a human-readable reason. Nothing here returns
//! `Err` or panics during a render pass.

use crate::node::{Card, ChecklistItem, KeyValue, NodeBody, PresentationNode};
use crate::value::{inline_text, item_title, scalar_text, value_lines};
use ocre_contract::{Block, CardSpec, OutputDocument, RendererKind, TableSpec};
use ocre_path::{expand, resolve, Resolution};
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use serde_json::Value;

/// Render one main-content block against the document
#[must_use]
pub fn render_block(block: &Block, doc: &OutputDocument) -> PresentationNode {
    let body = match block.renderer {
        RendererKind::Hero => hero(block, doc),
        RendererKind::Bullets => bullets(block, doc),
        RendererKind::Cards => match &block.cards {
            Some(spec) => render_cards(spec, doc.root(), &block.id),
            None => definition_missing("cards"),
        },
        RendererKind::Table => match &block.table {
            Some(spec) => render_table(spec, doc.root(), &block.id),
            None => definition_missing("table"),
        },
        RendererKind::Checklist => render_checklist(block.path.as_deref(), doc.root(), &block.id),
        RendererKind::CopyBlocks => copy_blocks(block, doc),
        RendererKind::ImagePrompts => image_prompts(block, doc),
        RendererKind::Markdown => markdown(block, doc),
        RendererKind::Mermaid => mermaid(block, doc),
        RendererKind::AnalysisHighlights => analysis_highlights(block, doc),
        RendererKind::Unknown => NodeBody::Placeholder {
            reason: format!("renderer for block '{}' is missing or not recognized", block.id),
        },
    };

    let mut node = PresentationNode::new(block.id.clone(), body);
    if let Some(label) = &block.label {
        node = node.with_label(label.clone());
    }
    if let Some(template) = &block.template {
        let subtitle = expand(template, doc.root());
        if !subtitle.is_empty() {
            node = node.with_subtitle(subtitle);
        }
    }
    node
}

/// Placeholder body for a block/section missing its sub-config
pub(crate) fn definition_missing(what: &str) -> NodeBody {
    NodeBody::Placeholder {
        reason: format!("definition missing: no {what} configuration"),
    }
}

fn resolved<'a>(block: &Block, doc: &'a OutputDocument) -> Resolution<'a> {
    resolve(doc.root(), block.path.as_deref(), Some(&block.id))
}

/// Single prominent value; never left as raw JSON text
fn hero(block: &Block, doc: &OutputDocument) -> NodeBody {
    let res = resolved(block, doc);
    match res.value() {
        Some(Value::Null) | None => match res.error() {
            Some(err) => NodeBody::Placeholder {
                reason: err.to_string(),
            },
            None => NodeBody::EmptyState {
                message: "no value present".to_string(),
            },
        },
        Some(Value::String(s)) => NodeBody::Hero { text: s.clone() },
        Some(value @ (Value::Array(_) | Value::Object(_))) => NodeBody::Hero {
            text: value_lines(value).join("\n"),
        },
        Some(scalar) => NodeBody::Hero {
            text: inline_text(scalar),
        },
    }
}

/// Labeled field list, or a direct array/scalar turned into a list
fn bullets(block: &Block, doc: &OutputDocument) -> NodeBody {
    if let Some(fields) = block.fields.as_ref().filter(|f| !f.is_empty()) {
        let entries = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let label = field
                    .label
                    .clone()
                    .or_else(|| field.effective_path().map(ToString::to_string))
                    .unwrap_or_else(|| format!("field {}", i + 1));
                let res = resolve(doc.root(), field.effective_path(), Some(&block.id));
                let value = match res.value() {
                    Some(v) => inline_text(v),
                    // Inline warning at the smallest granularity
                    None => res.error().unwrap_or("not found").to_string(),
                };
                KeyValue { label, value }
            })
            .collect();
        return NodeBody::KeyValueList { entries };
    }

    let res = resolved(block, doc);
    match res.value() {
        None => NodeBody::Placeholder {
            reason: res.error().unwrap_or("no data").to_string(),
        },
        Some(Value::Array(items)) => NodeBody::BulletList {
            items: items.iter().map(inline_text).collect(),
        },
        Some(Value::Object(map)) => NodeBody::KeyValueList {
            entries: map
                .iter()
                .map(|(k, v)| KeyValue {
                    label: k.clone(),
                    value: inline_text(v),
                })
                .collect(),
        },
        Some(Value::Null) => NodeBody::EmptyState {
            message: "no entries".to_string(),
        },
        Some(scalar) => NodeBody::BulletList {
            items: vec![inline_text(scalar)],
        },
    }
}

/// Card grid: item array via `itemsPath`, per-item title/subtitle/fields
pub(crate) fn render_cards(spec: &CardSpec, root: &Value, context: &str) -> NodeBody {
    let res = resolve(root, spec.items_path.as_deref(), Some(context));
    let items = match res.value() {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return NodeBody::Placeholder {
                reason: format!(
                    "card data at {} is not an array",
                    spec.items_path.as_deref().unwrap_or("(root)")
                ),
            }
        }
        None => {
            return NodeBody::EmptyState {
                message: format!("no card data ({})", res.error().unwrap_or("missing")),
            }
        }
    };
    if items.is_empty() {
        return NodeBody::EmptyState {
            message: "no card data".to_string(),
        };
    }

    let cards = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let title = spec
                .title_path
                .as_deref()
                .and_then(|p| resolve(item, Some(p), Some(context)).value())
                .and_then(scalar_text)
                .unwrap_or_else(|| item_title(item, i));
            let subtitle = spec
                .subtitle_path
                .as_deref()
                .and_then(|p| resolve(item, Some(p), Some(context)).value())
                .and_then(scalar_text);
            let fields = spec
                .fields
                .iter()
                .map(|field| {
                    let label = field
                        .label
                        .clone()
                        .or_else(|| field.effective_path().map(ToString::to_string))
                        .unwrap_or_default();
                    let value = resolve(item, field.effective_path(), Some(context))
                        .value()
                        .map_or_else(|| "not found".to_string(), inline_text);
                    KeyValue { label, value }
                })
                .collect();
            Card {
                title,
                subtitle,
                fields,
                body: None,
            }
        })
        .collect();
    NodeBody::CardGroup { cards }
}

/// Tabular rows via `rowsPath`, cells via declared column paths
pub(crate) fn render_table(spec: &TableSpec, root: &Value, context: &str) -> NodeBody {
    let res = resolve(root, spec.rows_path.as_deref(), Some(context));
    let rows = match res.value() {
        Some(Value::Array(rows)) => rows,
        Some(_) => {
            return NodeBody::Placeholder {
                reason: format!(
                    "table data at {} is not an array",
                    spec.rows_path.as_deref().unwrap_or("(root)")
                ),
            }
        }
        None => {
            return NodeBody::Placeholder {
                reason: res.error().unwrap_or("no table data").to_string(),
            }
        }
    };
    if spec.columns.is_empty() {
        return definition_missing("table column");
    }

    let columns: Vec<String> = spec.columns.iter().map(ocre_contract::ColumnSpec::header).collect();
    let cells = rows
        .iter()
        .map(|row| {
            spec.columns
                .iter()
                .map(|col| {
                    resolve(row, col.effective_path(), Some(context))
                        .value()
                        .map(inline_text)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    NodeBody::Table {
        columns,
        rows: cells,
    }
}

/// String array rendered as checked items
pub(crate) fn render_checklist(path: Option<&str>, root: &Value, context: &str) -> NodeBody {
    let res = resolve(root, path, Some(context));
    match res.value() {
        None => NodeBody::EmptyState {
            message: format!("no checklist entries ({})", res.error().unwrap_or("missing")),
        },
        Some(Value::Array(items)) if items.is_empty() => NodeBody::EmptyState {
            message: "checklist is empty".to_string(),
        },
        Some(Value::Array(items)) => NodeBody::Checklist {
            items: items
                .iter()
                .map(|item| ChecklistItem {
                    text: inline_text(item),
                    checked: true,
                })
                .collect(),
        },
        Some(_) => NodeBody::Placeholder {
            reason: format!(
                "checklist data at {} is not an array",
                path.unwrap_or("(root)")
            ),
        },
    }
}

/// Copy-ready text blocks: string, array of strings/objects, or a map
fn copy_blocks(block: &Block, doc: &OutputDocument) -> NodeBody {
    let res = resolved(block, doc);
    match res.value() {
        None => NodeBody::Placeholder {
            reason: res.error().unwrap_or("no copy text").to_string(),
        },
        Some(Value::String(text)) => NodeBody::CodeBlock {
            language: None,
            text: text.clone(),
        },
        Some(Value::Array(items)) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(i, item)| copy_entry(&format!("{}-{i}", block.id), None, item))
                .collect();
            NodeBody::Group { children }
        }
        Some(Value::Object(map)) => {
            let children = map
                .iter()
                .map(|(key, value)| {
                    copy_entry(&format!("{}-{key}", block.id), Some(key.clone()), value)
                })
                .collect();
            NodeBody::Group { children }
        }
        Some(_) => NodeBody::Placeholder {
            reason: "copy content is not text".to_string(),
        },
    }
}

/// One copy-blocks entry; objects supply their own label and text members
fn copy_entry(id: &str, label: Option<String>, value: &Value) -> PresentationNode {
    let label = label.or_else(|| {
        ["label", "title", "name"]
            .iter()
            .find_map(|k| value.get(k).and_then(scalar_text))
    });
    let text = match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => ["text", "content", "copy", "body"]
            .iter()
            .find_map(|k| value.get(k).and_then(scalar_text)),
        other => scalar_text(other),
    };
    let body = match text {
        Some(text) => NodeBody::CodeBlock {
            language: None,
            text,
        },
        None => NodeBody::Paragraph {
            text: inline_text(value),
        },
    };
    let mut node = PresentationNode::new(id, body);
    if let Some(label) = label {
        node = node.with_label(label);
    }
    node
}

/// Image production instructions rendered as prompt cards
fn image_prompts(block: &Block, doc: &OutputDocument) -> NodeBody {
    let res = resolved(block, doc);
    match res.value() {
        None => NodeBody::Placeholder {
            reason: res.error().unwrap_or("no image prompts").to_string(),
        },
        Some(Value::String(prompt)) => NodeBody::CardGroup {
            cards: vec![Card {
                title: "Prompt".to_string(),
                subtitle: None,
                fields: vec![],
                body: Some(prompt.clone()),
            }],
        },
        Some(Value::Array(items)) if items.is_empty() => NodeBody::EmptyState {
            message: "no image prompts".to_string(),
        },
        Some(Value::Array(items)) => NodeBody::CardGroup {
            cards: items
                .iter()
                .enumerate()
                .map(|(i, item)| prompt_card(item, i))
                .collect(),
        },
        Some(_) => NodeBody::Placeholder {
            reason: "image prompt data is not text or a list".to_string(),
        },
    }
}

/// Build one prompt card; scalar members other than the prompt text become
/// labeled fields (aspect ratio, style and the like)
fn prompt_card(item: &Value, index: usize) -> Card {
    const PROMPT_KEYS: [&str; 4] = ["prompt", "description", "instructions", "text"];

    if let Some(prompt) = scalar_text(item) {
        return Card {
            title: format!("Prompt {}", index + 1),
            subtitle: None,
            fields: vec![],
            body: Some(prompt),
        };
    }

    let title = item_title(item, index);
    let body = PROMPT_KEYS
        .iter()
        .find_map(|k| item.get(k).and_then(scalar_text));
    let fields = match item {
        Value::Object(map) => map
            .iter()
            .filter(|(k, _)| !PROMPT_KEYS.contains(&k.as_str()))
            .filter_map(|(k, v)| scalar_text(v).map(|value| (k, value)))
            .filter(|(k, value)| {
                // The member that supplied the title is redundant as a field
                !(value == &title
                    && ["title", "name", "label", "id", "heading"].contains(&k.as_str()))
            })
            .map(|(k, value)| KeyValue {
                label: k.clone(),
                value,
            })
            .collect(),
        _ => vec![],
    };
    Card {
        title,
        subtitle: None,
        fields,
        body,
    }
}

/// Markdown text with a sniffed first heading
fn markdown(block: &Block, doc: &OutputDocument) -> NodeBody {
    let res = resolved(block, doc);
    match res.value() {
        Some(Value::String(text)) => NodeBody::MarkdownText {
            heading: first_heading(text),
            text: text.clone(),
        },
        Some(_) => NodeBody::Placeholder {
            reason: "markdown content is not text".to_string(),
        },
        None => NodeBody::Placeholder {
            reason: res.error().unwrap_or("no markdown content").to_string(),
        },
    }
}

/// Extract the first heading's text from a markdown document
fn first_heading(text: &str) -> Option<String> {
    let mut in_heading = false;
    let mut buf = String::new();
    for event in MdParser::new(text) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => {
                if !buf.is_empty() {
                    return Some(buf);
                }
                in_heading = false;
            }
            Event::Text(t) if in_heading => buf.push_str(&t),
            Event::Code(t) if in_heading => buf.push_str(&t),
            _ => {}
        }
    }
    None
}

/// Mermaid diagram syntax rendered as a fenced block
fn mermaid(block: &Block, doc: &OutputDocument) -> NodeBody {
    let res = resolved(block, doc);
    match res.value() {
        Some(Value::String(text)) => NodeBody::CodeBlock {
            language: Some("mermaid".to_string()),
            text: text.clone(),
        },
        Some(_) => NodeBody::Placeholder {
            reason: "diagram content is not text".to_string(),
        },
        None => NodeBody::Placeholder {
            reason: res.error().unwrap_or("no diagram content").to_string(),
        },
    }
}

/// Analysis highlights: a list of findings, labeled or plain
fn analysis_highlights(block: &Block, doc: &OutputDocument) -> NodeBody {
    let res = resolved(block, doc);
    match res.value() {
        None => NodeBody::Placeholder {
            reason: res.error().unwrap_or("no highlights").to_string(),
        },
        Some(Value::Array(items)) if items.is_empty() => NodeBody::EmptyState {
            message: "no highlights".to_string(),
        },
        Some(Value::Array(items)) => NodeBody::BulletList {
            items: items.iter().map(highlight_text).collect(),
        },
        Some(Value::Object(map)) => NodeBody::KeyValueList {
            entries: map
                .iter()
                .map(|(k, v)| KeyValue {
                    label: k.clone(),
                    value: inline_text(v),
                })
                .collect(),
        },
        Some(Value::String(text)) => NodeBody::Paragraph { text: text.clone() },
        Some(_) => NodeBody::Placeholder {
            reason: "highlight data has no recognizable shape".to_string(),
        },
    }
}

/// One highlight line; objects supply their own label/text members
fn highlight_text(item: &Value) -> String {
    if let Some(text) = scalar_text(item) {
        return text;
    }
    let label = ["label", "title", "metric"]
        .iter()
        .find_map(|k| item.get(k).and_then(scalar_text));
    let text = ["insight", "finding", "text", "value"]
        .iter()
        .find_map(|k| item.get(k).and_then(scalar_text));
    match (label, text) {
        (Some(label), Some(text)) => format!("{label}: {text}"),
        (None, Some(text)) => text,
        (Some(label), None) => label,
        (None, None) => inline_text(item),
    }
}
