//! Contract-driven rendering of agent run output
//!
//! The rendering half of the engine: block dispatch, section rendering,
//! advisory rule evaluation, fallback auto-visualization, and markdown
//! export. The single entry point is [`render_run`]; everything it calls
//! is pure and synchronous, and the whole pass degrades instead of
//! failing — malformed contracts and mismatched data become placeholder
//! nodes, never errors.

mod auto;
mod dispatch;
mod engine;
mod export;
mod node;
mod rules;
mod section;
mod value;

pub use auto::auto_visualize;
pub use dispatch::render_block;
pub use engine::{render_run, RenderOutput};
pub use export::{export_markdown, write_document};
pub use node::{Card, ChecklistItem, KeyValue, NodeBody, PresentationNode, TabView};
pub use rules::{evaluate, RuleViolation};
pub use section::render_section;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
