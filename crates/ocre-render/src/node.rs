//! Presentation nodes
//!
//! The renderer-agnostic output structure of the engine. A render pass
//! produces an ordered list of [`PresentationNode`]s with stable ids
//! (block/section ids from the contract, synthesized ids in fallback mode);
//! the host UI walks the tree, the markdown exporter serializes it.
//!
//! Every failure mode in the engine maps to a node — [`NodeBody::Placeholder`]
//! for contract/data mismatches, [`NodeBody::EmptyState`] for legitimately
//! absent data — so the worst user-visible outcome is a labeled explanation,
//! never a blank screen.

use serde::{Deserialize, Serialize};

/// One node of the presentation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationNode {
    /// Stable identifier (contract block/section id, or synthesized)
    pub id: String,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Expanded subtitle line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Node content
    pub body: NodeBody,
}

impl PresentationNode {
    /// Create a node
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, body: NodeBody) -> Self {
        Self {
            id: id.into(),
            label: None,
            subtitle: None,
            body,
        }
    }

    /// With display label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// With subtitle
    #[inline]
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// A placeholder node with a human-readable reason
    #[inline]
    #[must_use]
    pub fn placeholder(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeBody::Placeholder {
                reason: reason.into(),
            },
        )
    }

    /// An empty-state node
    #[inline]
    #[must_use]
    pub fn empty(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeBody::EmptyState {
                message: message.into(),
            },
        )
    }

    /// Whether this node or any descendant carries the given text
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.label.as_deref().is_some_and(|l| l.contains(needle))
            || self.subtitle.as_deref().is_some_and(|s| s.contains(needle))
            || self.body.contains_text(needle)
    }

    /// Whether this node is a placeholder
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, NodeBody::Placeholder { .. })
    }
}

/// Node content, one variant per presentation shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeBody {
    /// Single prominent value
    Hero {
        /// Display text (may be multi-line for object values)
        text: String,
    },
    /// Plain prose
    Paragraph {
        /// Display text
        text: String,
    },
    /// Unordered list
    BulletList {
        /// List entries
        items: Vec<String>,
    },
    /// Checked item list
    Checklist {
        /// Checklist entries
        items: Vec<ChecklistItem>,
    },
    /// Labeled key/value entries
    KeyValueList {
        /// Entries in contract order
        entries: Vec<KeyValue>,
    },
    /// Tabular data
    Table {
        /// Column headers
        columns: Vec<String>,
        /// Row cells, stringified
        rows: Vec<Vec<String>>,
    },
    /// Card grid
    CardGroup {
        /// Cards in item order
        cards: Vec<Card>,
    },
    /// Copy-ready or diagram text
    CodeBlock {
        /// Syntax hint (`json`, `mermaid`, …)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Verbatim content
        text: String,
    },
    /// Markdown-formatted text
    MarkdownText {
        /// First heading of the document, when present
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        /// Raw markdown source
        text: String,
    },
    /// Tab-switchable diagnostic views
    Tabs {
        /// Tabs in declared order
        tabs: Vec<TabView>,
    },
    /// Nested node group
    Group {
        /// Child nodes in order
        children: Vec<PresentationNode>,
    },
    /// Something the contract or data could not supply, with the reason
    Placeholder {
        /// Human-readable explanation
        reason: String,
    },
    /// Legitimately absent or empty data
    EmptyState {
        /// Human-readable explanation
        message: String,
    },
}

impl NodeBody {
    /// Whether this body or any nested node carries the given text
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Self::Hero { text }
            | Self::Paragraph { text }
            | Self::CodeBlock { text, .. }
            | Self::MarkdownText { text, .. } => text.contains(needle),
            Self::BulletList { items } => items.iter().any(|i| i.contains(needle)),
            Self::Checklist { items } => items.iter().any(|i| i.text.contains(needle)),
            Self::KeyValueList { entries } => entries
                .iter()
                .any(|e| e.label.contains(needle) || e.value.contains(needle)),
            Self::Table { columns, rows } => {
                columns.iter().any(|c| c.contains(needle))
                    || rows.iter().flatten().any(|c| c.contains(needle))
            }
            Self::CardGroup { cards } => cards.iter().any(|c| c.contains_text(needle)),
            Self::Tabs { tabs } => tabs.iter().any(|t| {
                t.label.contains(needle) || t.body.contains_text(needle)
            }),
            Self::Group { children } => children.iter().any(|c| c.contains_text(needle)),
            Self::Placeholder { reason } => reason.contains(needle),
            Self::EmptyState { message } => message.contains(needle),
        }
    }
}

/// One checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Entry text
    pub text: String,
    /// Whether the entry is checked
    pub checked: bool,
}

/// One labeled value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    /// Display label
    pub label: String,
    /// Stringified value
    pub value: String,
}

/// One card in a card grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card title
    pub title: String,
    /// Card subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Labeled scalar fields
    #[serde(default)]
    pub fields: Vec<KeyValue>,
    /// Free-text body (prompts, copy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Card {
    fn contains_text(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.subtitle.as_deref().is_some_and(|s| s.contains(needle))
            || self
                .fields
                .iter()
                .any(|f| f.label.contains(needle) || f.value.contains(needle))
            || self.body.as_deref().is_some_and(|b| b.contains(needle))
    }
}

/// One diagnostic tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    /// Tab identifier
    pub id: String,
    /// Tab label
    pub label: String,
    /// Tab content
    pub body: Box<NodeBody>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_builders() {
        let node = PresentationNode::new("n1", NodeBody::Paragraph { text: "hi".into() })
            .with_label("Greeting")
            .with_subtitle("sub");
        assert_eq!(node.id, "n1");
        assert_eq!(node.label.as_deref(), Some("Greeting"));
        assert_eq!(node.subtitle.as_deref(), Some("sub"));
    }

    #[test]
    fn placeholder_is_detectable() {
        let node = PresentationNode::placeholder("x", "path not found");
        assert!(node.is_placeholder());
        assert!(node.contains_text("not found"));
    }

    #[test]
    fn contains_text_recurses_into_groups() {
        let inner = PresentationNode::new(
            "inner",
            NodeBody::BulletList {
                items: vec!["needle in list".into()],
            },
        );
        let outer = PresentationNode::new(
            "outer",
            NodeBody::Group {
                children: vec![inner],
            },
        );
        assert!(outer.contains_text("needle"));
        assert!(!outer.contains_text("haystack"));
    }

    #[test]
    fn contains_text_searches_cards_and_tabs() {
        let body = NodeBody::Tabs {
            tabs: vec![TabView {
                id: "t".into(),
                label: "Raw".into(),
                body: Box::new(NodeBody::CardGroup {
                    cards: vec![Card {
                        title: "Variant A".into(),
                        subtitle: None,
                        fields: vec![],
                        body: None,
                    }],
                }),
            }],
        };
        assert!(body.contains_text("Variant A"));
    }

    #[test]
    fn node_serializes_with_kind_tag() {
        let node = PresentationNode::empty("e", "nothing here");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["body"]["kind"], "emptyState");
        assert_eq!(json["body"]["message"], "nothing here");
    }
}
