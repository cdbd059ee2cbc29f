//! Advisory contract schema checking
//!
//! Contracts are user-edited and only loosely schema-checked: the issues
//! returned here are authoring hints, surfaced to the contract author and
//! never used to block rendering.

use crate::contract::ViewContract;
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde_json::Value;

/// JSON Schema for [`ViewContract`], derived once
static CONTRACT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    let schema = schemars::schema_for!(ViewContract);
    // An accept-all schema keeps checking advisory even if derivation
    // cannot serialize
    serde_json::to_value(schema).unwrap_or(Value::Bool(true))
});

/// Check a raw contract document against the contract schema
///
/// Returns a list of human-readable issues; empty means the document
/// matches. Compilation failure degrades to no issues.
#[must_use]
pub fn check_contract_value(value: &Value) -> Vec<String> {
    let compiled = match JSONSchema::compile(&CONTRACT_SCHEMA) {
        Ok(schema) => schema,
        Err(err) => {
            tracing::warn!(error = %err, "contract schema failed to compile");
            return Vec::new();
        }
    };

    // The error iterator borrows the compiled schema; collect into a local
    // so it drops before `compiled` does.
    let issues = match compiled.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect(),
    };
    issues
}
