//! OCRE Path Expressions
//!
//! Path expressions, the resolver, and the `{{expr}}` template expander.
//!
//! # Core Concepts
//!
//! - [`PathExpr`]: Tokenized form of a path expression (key sequence plus
//!   `.length`/index-syntax markers)
//! - [`Resolution`]: Value-or-diagnostic result of resolving one path
//! - [`resolve`]: Evaluate a path against a JSON value without ever failing
//! - [`expand`]: Expand `{{expr}}` placeholders inside template strings
//!
//! # Example
//!
//! ```rust
//! use ocre_path::resolve;
//! use serde_json::json;
//!
//! let doc = json!({ "finalOutput": { "core": { "oneLiner": "Buy now" } } });
//! let res = resolve(&doc, Some("$.finalOutput.core.oneLiner"), Some("c1"));
//! assert_eq!(res.value(), Some(&json!("Buy now")));
//! ```
//!
//! Resolution failure is a value, not an error: a miss yields a
//! [`Resolution`] carrying a human-readable message, and callers render an
//! inline warning while everything else proceeds.

#![warn(unreachable_pub)]

mod expr;
mod resolve;
mod template;

pub use expr::PathExpr;
pub use resolve::{resolve, resolve_expr, Resolution};
pub use template::expand;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
