//! Error types for contract ingress
//!
//! Loading a contract document is the only fallible surface of this crate;
//! everything downstream of a loaded contract degrades with placeholders
//! instead of errors.

/// Errors while loading a view contract
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Contract JSON failed to parse or deserialize
    #[error("invalid contract json: {0}")]
    Json(#[from] serde_json::Error),

    /// Contract YAML failed to parse or deserialize
    #[error("invalid contract yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
