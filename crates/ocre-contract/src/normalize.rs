//! Presentation normalization
//!
//! Canonicalizes the heterogeneous stored output shapes of a [`RunRecord`]
//! (raw LLM text, parsed JSON, schema-validated final JSON, plus the legacy
//! member names handled by [`StoredOutput`]) into one root object before
//! resolution begins. This is the system's backward-compatibility seam and
//! the only place version-specific branching is allowed.

use crate::run::RunRecord;
use serde_json::{json, Value};

/// Which stored shape supplied the logical output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    /// Schema-validated final output
    Validated,
    /// Parsed-but-unvalidated output
    Parsed,
    /// Raw LLM text
    Raw,
    /// Nothing was stored
    Empty,
}

/// The canonical root object after normalization
///
/// Always an object with a single `finalOutput` member holding the logical
/// output, regardless of which historical field sourced it. Path resolution
/// runs against [`root`](Self::root); the auto-visualizer runs against
/// [`final_output`](Self::final_output).
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    root: Value,
    source: OutputSource,
}

impl OutputDocument {
    /// Normalize a run record into the canonical document
    ///
    /// Precedence for locating the logical output: validated final output,
    /// then parsed output, then raw text — first present wins. Raw text
    /// that itself parses as JSON is promoted to the structured shape.
    #[must_use]
    pub fn normalize(run: &RunRecord) -> Self {
        if let Some(final_output) = &run.output.final_output {
            return Self::wrap(final_output.clone(), OutputSource::Validated);
        }
        if let Some(parsed) = &run.output.parsed_output {
            return Self::wrap(parsed.clone(), OutputSource::Parsed);
        }
        if let Some(raw) = &run.output.raw_output {
            let value = serde_json::from_str::<Value>(raw)
                .unwrap_or_else(|_| Value::String(raw.clone()));
            return Self::wrap(value, OutputSource::Raw);
        }
        tracing::debug!(agent = %run.agent_id, "run has no stored output");
        Self::wrap(Value::Null, OutputSource::Empty)
    }

    /// Build a document from an arbitrary value
    ///
    /// Idempotent: a value that is already the canonical shape (an object
    /// with a `finalOutput` member) passes through unchanged.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.get("finalOutput").is_some() {
            return Self {
                root: value,
                source: OutputSource::Validated,
            };
        }
        Self::wrap(value, OutputSource::Validated)
    }

    fn wrap(final_output: Value, source: OutputSource) -> Self {
        Self {
            root: json!({ "finalOutput": final_output }),
            source,
        }
    }

    /// The canonical root object
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The logical final output
    ///
    /// `Null` when the run stored nothing.
    #[inline]
    #[must_use]
    pub fn final_output(&self) -> &Value {
        self.root.get("finalOutput").unwrap_or(&Value::Null)
    }

    /// Which stored shape supplied the output
    #[inline]
    #[must_use]
    pub fn source(&self) -> OutputSource {
        self.source
    }

    /// Whether the run stored no usable output at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source == OutputSource::Empty || self.final_output().is_null()
    }
}
