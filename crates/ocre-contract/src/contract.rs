//! View contract schema
//!
//! The in-memory shape of a view contract: ordered sections, an optional
//! main-content block list, and advisory structural rules. Contracts are
//! authored externally (per agent definition, JSON or YAML), versioned, and
//! treated as read-only input. The model is deliberately loose: every
//! type-specific sub-config is optional and unknown discriminators map to
//! an `Unknown` variant, so a stale or hand-edited contract still loads and
//! renders placeholders instead of failing.

use crate::error::ContractError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A declarative view contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewContract {
    /// Stable contract identifier (usually the agent id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Contract version, bumped when the agent definition changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short badge labels shown next to the title
    #[serde(default)]
    pub badges: Vec<String>,
    /// One-line summary template (may contain `{{expr}}` placeholders)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The primary block list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_content: Option<MainContent>,
    /// Ordered secondary sections
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Advisory structural rules
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl ViewContract {
    /// Load a contract from a JSON string
    ///
    /// # Errors
    /// Returns [`ContractError::Json`] when the document is not valid JSON
    /// or does not deserialize into the contract shape.
    pub fn from_json_str(source: &str) -> Result<Self, ContractError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a contract from a YAML string
    ///
    /// # Errors
    /// Returns [`ContractError::Yaml`] when the document is not valid YAML
    /// or does not deserialize into the contract shape.
    pub fn from_yaml_str(source: &str) -> Result<Self, ContractError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Whether this contract declares anything renderable
    ///
    /// An empty contract (no main-content blocks, no sections) triggers the
    /// fallback auto-visualizer, exactly like a missing one.
    #[must_use]
    pub fn has_renderable_content(&self) -> bool {
        self.main_content
            .as_ref()
            .is_some_and(|mc| !mc.blocks.is_empty())
            || !self.sections.is_empty()
    }
}

/// The main-content block list of a contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MainContent {
    /// Main-content heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One main-content block, discriminated by `renderer`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block identifier, unique within a contract
    pub id: String,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Visual prominence hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// Rendering strategy discriminator
    #[serde(default)]
    pub renderer: RendererKind,
    /// Path expression narrowing the document for this block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Subtitle template with `{{expr}}` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Labeled fields (bullets-style blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldSpec>>,
    /// Card configuration (cards-style blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<CardSpec>,
    /// Table configuration (table-style blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableSpec>,
}

/// Rendering strategies for main-content blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RendererKind {
    /// Single prominent value
    Hero,
    /// Labeled or direct list
    Bullets,
    /// Card grid over an item array
    Cards,
    /// Tabular rows and columns
    Table,
    /// Checked item list
    Checklist,
    /// Copy-ready text blocks
    CopyBlocks,
    /// Image production instructions
    ImagePrompts,
    /// Markdown-formatted text
    Markdown,
    /// Mermaid diagram syntax
    Mermaid,
    /// Analysis highlight list
    AnalysisHighlights,
    /// Anything this engine does not recognize
    #[serde(other)]
    Unknown,
}

impl Default for RendererKind {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Visual prominence hint for a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Importance {
    /// Leading content
    Primary,
    /// Supporting content
    Secondary,
    /// Diagnostic or auxiliary content
    Auxiliary,
}

/// One labeled, independently-resolved field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Preferred path expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Legacy path field from older contracts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_path: Option<String>,
}

impl FieldSpec {
    /// Effective path: prefer `path`, fall back to the legacy `valuePath`
    #[inline]
    #[must_use]
    pub fn effective_path(&self) -> Option<&str> {
        self.path.as_deref().or(self.value_path.as_deref())
    }
}

/// Card rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardSpec {
    /// Path to the item array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_path: Option<String>,
    /// Per-item path to the card title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_path: Option<String>,
    /// Per-item path to the card subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_path: Option<String>,
    /// Per-item field list
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Table rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
    /// Path to the row array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_path: Option<String>,
    /// Declared columns
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// One declared table column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Column header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Plain member key on each row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Preferred per-row path expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Legacy per-row path field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_path: Option<String>,
}

impl ColumnSpec {
    /// Effective per-row path: `path`, then legacy `valuePath`, then `key`
    #[inline]
    #[must_use]
    pub fn effective_path(&self) -> Option<&str> {
        self.path
            .as_deref()
            .or(self.value_path.as_deref())
            .or(self.key.as_deref())
    }

    /// Column header, falling back to the key or path
    #[must_use]
    pub fn header(&self) -> String {
        self.label
            .clone()
            .or_else(|| self.key.clone())
            .or_else(|| self.effective_path().map(ToString::to_string))
            .unwrap_or_default()
    }
}

/// One secondary section, discriminated by `type`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section identifier, unique within a contract
    pub id: String,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Section strategy discriminator
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    /// Path expression narrowing the document for this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Summary configuration (`summary` sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummarySpec>,
    /// Table configuration (`table` sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableSpec>,
    /// Card configuration (`cards` sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<CardSpec>,
    /// Checklist configuration (`checklist` sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<ChecklistSpec>,
    /// Tab definitions (`raw` / `executionProof` sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<TabSpec>>,
}

/// Section rendering strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    /// Templated or field-list summary
    Summary,
    /// Tabular section
    Table,
    /// Card-grid section
    Cards,
    /// Checklist section
    Checklist,
    /// Raw-data diagnostic tabs
    Raw,
    /// Execution-proof diagnostic tabs
    ExecutionProof,
    /// Anything this engine does not recognize
    #[serde(other)]
    Unknown,
}

impl Default for SectionKind {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Summary section configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarySpec {
    /// Summary template with `{{expr}}` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Labeled fields rendered beneath the template line
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Checklist section configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSpec {
    /// Path to the string array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One diagnostic tab over a fixed run-record slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TabSpec {
    /// Tab identifier
    pub id: String,
    /// Tab label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Which slice of the run record the tab shows
    pub slice: RecordSlice,
}

/// Fixed named slices of a run record exposed by diagnostic tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RecordSlice {
    /// The validated final output
    FinalOutput,
    /// The parsed-but-unvalidated output
    ParsedOutput,
    /// The raw LLM text
    RawOutput,
    /// The schema validation result
    Validation,
}

/// Advisory structural rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule discriminator
    #[serde(default)]
    pub kind: RuleKind,
    /// Path to the array the rule inspects
    #[serde(default)]
    pub path: String,
    /// Minimum length (minLength / rangeLength)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    /// Maximum length (maxLength / rangeLength)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    /// Violation level override (defaults to warning)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Section the violation should attach to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Message override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Supported rule kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    /// Array length must be at least `min`
    MinLength,
    /// Array length must be at most `max`
    MaxLength,
    /// Array length must be within `[min, max]`
    RangeLength,
    /// Anything this engine does not recognize (ignored)
    #[serde(other)]
    Unknown,
}

impl Default for RuleKind {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Violation severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Advisory quality hint
    Warning,
    /// Strong quality hint; still never gates rendering
    Error,
}
