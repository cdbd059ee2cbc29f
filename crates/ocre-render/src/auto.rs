//! Fallback auto-visualization
//!
//! When a run has no contract, or the contract declares nothing renderable,
//! the engine still produces a structured reading of the output instead of
//! a JSON dump. The walk is heuristic and shallow: recognize conventional
//! container keys, turn object arrays into cards, decompose objects into
//! labeled scalars, and cut off below a fixed depth.

use crate::node::{Card, KeyValue, NodeBody, PresentationNode};
use crate::value::{inline_text, item_title, scalar_text};
use serde_json::Value;

/// Recursion cutoff; deeper values summarize inline
const MAX_DEPTH: usize = 3;

/// Object keys treated as primary content containers, in priority order
const CONTAINER_KEYS: [&str; 7] = [
    "sections", "items", "cards", "blocks", "elements", "variants", "steps",
];

/// Build a best-effort presentation of an arbitrary output value
#[must_use]
pub fn auto_visualize(value: &Value) -> PresentationNode {
    visit(value, 0, "auto")
}

fn visit(value: &Value, depth: usize, id: &str) -> PresentationNode {
    match value {
        Value::Null => PresentationNode::empty(id, "no output stored"),
        Value::String(text) => {
            PresentationNode::new(id, NodeBody::Paragraph { text: text.clone() })
        }
        Value::Number(_) | Value::Bool(_) => PresentationNode::new(
            id,
            NodeBody::Paragraph {
                text: inline_text(value),
            },
        ),
        Value::Array(items) => PresentationNode::new(id, array_body(items, depth)),
        Value::Object(_) => object_node(value, depth, id),
    }
}

fn array_body(items: &[Value], depth: usize) -> NodeBody {
    if items.is_empty() {
        return NodeBody::EmptyState {
            message: "empty list".to_string(),
        };
    }
    if depth >= MAX_DEPTH {
        return NodeBody::Paragraph {
            text: format!("{} items", items.len()),
        };
    }

    // Object arrays read best as cards; anything else as a flat list.
    if items.iter().all(Value::is_object) {
        let cards = items
            .iter()
            .enumerate()
            .map(|(i, item)| object_card(item, i))
            .collect();
        return NodeBody::CardGroup { cards };
    }
    NodeBody::BulletList {
        items: items.iter().map(inline_text).collect(),
    }
}

/// One auto card per object array element: conventional title key, scalar
/// members as fields
fn object_card(item: &Value, index: usize) -> Card {
    let title = item_title(item, index);
    let fields = match item {
        Value::Object(map) => map
            .iter()
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
        body: None,
    }
}

fn object_node(value: &Value, depth: usize, id: &str) -> PresentationNode {
    let Value::Object(map) = value else {
        return visit(value, depth, id);
    };
    if map.is_empty() {
        return PresentationNode::empty(id, "empty output");
    }
    if depth >= MAX_DEPTH {
        return PresentationNode::new(
            id,
            NodeBody::Paragraph {
                text: inline_text(value),
            },
        );
    }

    let mut children = Vec::new();

    // Recognized containers first, so primary content leads the view
    for key in CONTAINER_KEYS {
        if let Some(container) = map.get(key) {
            if container.is_array() || container.is_object() {
                children.push(visit(container, depth + 1, &format!("{id}-{key}")).with_label(key));
            }
        }
    }

    // Scalars as one labeled list
    let scalars: Vec<KeyValue> = map
        .iter()
        .filter_map(|(k, v)| {
            scalar_text(v).map(|value| KeyValue {
                label: k.clone(),
                value,
            })
        })
        .collect();
    if !scalars.is_empty() {
        children.push(PresentationNode::new(
            format!("{id}-fields"),
            NodeBody::KeyValueList { entries: scalars },
        ));
    }

    // Remaining structured members, in document order
    for (key, member) in map {
        if CONTAINER_KEYS.contains(&key.as_str()) || scalar_text(member).is_some() {
            continue;
        }
        if member.is_null() {
            continue;
        }
        children.push(visit(member, depth + 1, &format!("{id}-{key}")).with_label(key.clone()));
    }

    if children.is_empty() {
        return PresentationNode::empty(id, "empty output");
    }
    if children.len() == 1 {
        let mut only = children.remove(0);
        only.id = id.to_string();
        return only;
    }
    PresentationNode::new(id, NodeBody::Group { children })
}
