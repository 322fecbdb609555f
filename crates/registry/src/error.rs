//! Library error types.
//!
//! Lookup misses and empty filter results are normal outcomes, not errors;
//! the only fallible surface is parsing static path definitions.

use thiserror::Error;

/// Errors from parsing static path definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition JSON could not be parsed.
    #[error("invalid path definition JSON")]
    Parse(#[from] serde_json::Error),

    /// A definition's key was empty.
    #[error("path definition {label:?} has an empty key")]
    EmptyKey { label: String },
}
