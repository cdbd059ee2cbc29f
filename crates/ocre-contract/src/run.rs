//! Run records
//!
//! A [`RunRecord`] is the persisted record of one agent execution: metadata,
//! the stored output in whichever of its historical shapes the executor
//! wrote, schema validation results, and optional quality diagnostics.
//! Created once per execution and immutable thereafter; the engine never
//! touches user-applied tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

/// Unique run identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunId(pub Ulid);

impl RunId {
    /// Generate new run ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Execution status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunStatus {
    /// Queued, not yet started
    Pending,
    /// Currently executing
    Running,
    /// Finished with output
    Succeeded,
    /// Finished with an error
    Failed,
    /// Stopped before completion
    Cancelled,
}

/// One schema validation issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Location of the issue, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Human-readable description
    pub message: String,
}

/// Schema validation outcome for a run's output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Whether the output passed the agent's output schema
    pub passed: bool,
    /// Issues found (may be non-empty even when passed, for soft checks)
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
}

/// The stored output of a run, in whichever shapes the executor persisted
///
/// Older schema versions used different member names; the serde aliases
/// keep those records loadable. Precedence between the shapes is the
/// normalizer's concern, not this struct's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOutput {
    /// Raw LLM text, exactly as returned
    #[serde(default, alias = "rawResponse", skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    /// Parsed-but-unvalidated JSON
    #[serde(default, alias = "parsedResponse", skip_serializing_if = "Option::is_none")]
    pub parsed_output: Option<Value>,
    /// Schema-validated final JSON
    #[serde(
        default,
        alias = "validatedOutput",
        alias = "output",
        skip_serializing_if = "Option::is_none"
    )]
    pub final_output: Option<Value>,
}

impl StoredOutput {
    /// Whether no output shape was stored at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_output.is_none() && self.parsed_output.is_none() && self.final_output.is_none()
    }
}

/// The persisted record of one agent execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    /// Run identifier
    pub run_id: RunId,
    /// Agent that produced this run
    pub agent_id: String,
    /// Execution status
    pub status: RunStatus,
    /// When execution started
    pub started_at: DateTime<Utc>,
    /// When execution finished, if it has
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Wall-clock duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Stored output shapes
    #[serde(default)]
    pub output: StoredOutput,
    /// Schema validation results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationOutcome>,
    /// Optional quality diagnostics (free-form, produced upstream)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Value>,
    /// User-applied tags (pinning etc.) — never touched by the engine
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RunRecord {
    /// Create a new succeeded run for an agent, with empty output
    #[must_use]
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            run_id: RunId::new(),
            agent_id: agent_id.into(),
            status: RunStatus::Succeeded,
            started_at: Utc::now(),
            finished_at: None,
            duration_ms: None,
            output: StoredOutput::default(),
            validation: None,
            quality: None,
            tags: Vec::new(),
        }
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: RunStatus) -> Self {
        self.status = status;
        self
    }

    /// With a validated final output
    #[inline]
    #[must_use]
    pub fn with_final_output(mut self, value: Value) -> Self {
        self.output.final_output = Some(value);
        self
    }

    /// With a parsed-but-unvalidated output
    #[inline]
    #[must_use]
    pub fn with_parsed_output(mut self, value: Value) -> Self {
        self.output.parsed_output = Some(value);
        self
    }

    /// With raw LLM text
    #[inline]
    #[must_use]
    pub fn with_raw_output(mut self, text: impl Into<String>) -> Self {
        self.output.raw_output = Some(text.into());
        self
    }

    /// With a validation outcome
    #[inline]
    #[must_use]
    pub fn with_validation(mut self, outcome: ValidationOutcome) -> Self {
        self.validation = Some(outcome);
        self
    }
}
