//! OCRE Contract Model
//!
//! The data model consumed by the rendering engine:
//!
//! - [`ViewContract`]: the declarative view contract (sections, blocks,
//!   paths, rules), authored per agent definition and treated as read-only
//! - [`RunRecord`]: one agent execution with its stored output and
//!   validation results
//! - [`OutputDocument`]: the canonical root object produced by the
//!   presentation normalizer
//! - [`ContractDigest`] / [`DigestCache`]: contract-version hashing with an
//!   injectable, TTL-bounded cache
//!
//! # Example
//!
//! ```rust
//! use ocre_contract::{OutputDocument, RunRecord};
//! use serde_json::json;
//!
//! let run = RunRecord::new("lp-structure")
//!     .with_final_output(json!({ "core": { "oneLiner": "Buy now" } }));
//! let doc = OutputDocument::normalize(&run);
//! assert_eq!(doc.final_output()["core"]["oneLiner"], "Buy now");
//! ```

#![warn(unreachable_pub)]

mod contract;
mod digest;
mod error;
mod normalize;
mod run;
mod validate;

pub use contract::{
    Block, CardSpec, ChecklistSpec, ColumnSpec, FieldSpec, Importance, MainContent, RecordSlice,
    RendererKind, Rule, RuleKind, Section, SectionKind, Severity, SummarySpec, TabSpec, TableSpec,
    ViewContract,
};
pub use digest::{ContractDigest, DigestCache};
pub use error::ContractError;
pub use normalize::{OutputDocument, OutputSource};
pub use run::{RunId, RunRecord, RunStatus, StoredOutput, ValidationIssue, ValidationOutcome};
pub use validate::check_contract_value;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
