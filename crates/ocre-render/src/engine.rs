//! Render pipeline entry point
//!
//! One pure, synchronous pass: normalize the run's stored output, then
//! either walk the contract (summary line, main-content blocks, sections,
//! rules) or fall back to auto-visualization when no renderable contract
//! exists. The pass is total: it returns a tree for every input and never
//! returns an error.

use crate::auto::auto_visualize;
use crate::dispatch::render_block;
use crate::node::{NodeBody, PresentationNode};
use crate::rules::{evaluate, RuleViolation};
use crate::section::render_section;
use ocre_contract::{OutputDocument, RunRecord, ViewContract};
use ocre_path::expand;
use serde::{Deserialize, Serialize};

/// The result of one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    /// Presentation nodes in contract order (or one fallback node)
    pub tree: Vec<PresentationNode>,
    /// Advisory rule violations; annotations only, content is never removed
    #[serde(default)]
    pub violations: Vec<RuleViolation>,
}

/// Render a run under an optional contract
///
/// A missing contract and a contract with nothing renderable behave
/// identically: the output is auto-visualized and no rules run.
#[must_use]
pub fn render_run(contract: Option<&ViewContract>, run: &RunRecord) -> RenderOutput {
    let doc = OutputDocument::normalize(run);
    let Some(contract) = contract.filter(|c| c.has_renderable_content()) else {
        tracing::info!(
            agent = %run.agent_id,
            run = %run.run_id,
            "no renderable contract, auto-visualizing output"
        );
        return RenderOutput {
            tree: vec![auto_visualize(doc.final_output())],
            violations: Vec::new(),
        };
    };

    let mut tree = Vec::new();
    if let Some(template) = &contract.summary {
        let text = expand(template, doc.root());
        if !text.is_empty() {
            tree.push(PresentationNode::new(
                "summary",
                NodeBody::Paragraph { text },
            ));
        }
    }
    if let Some(main) = &contract.main_content {
        let blocks: Vec<PresentationNode> = main
            .blocks
            .iter()
            .map(|block| render_block(block, &doc))
            .collect();
        // A titled main content groups its blocks under one heading node
        match &main.title {
            Some(title) if !blocks.is_empty() => tree.push(
                PresentationNode::new("main-content", NodeBody::Group { children: blocks })
                    .with_label(title.clone()),
            ),
            _ => tree.extend(blocks),
        }
    }
    tree.extend(
        contract
            .sections
            .iter()
            .map(|section| render_section(section, run, &doc)),
    );

    RenderOutput {
        tree,
        violations: evaluate(&contract.rules, &doc),
    }
}
