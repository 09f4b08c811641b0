//! Purifier error types

use crate::config::ConfigurationError;

/// Result type for purifier operations
pub type PurifierResult<T> = Result<T, PurifierError>;

/// Rejection of a filter expression.
///
/// Parsing is all-or-nothing: a `SyntaxError` means no part of the expression
/// is usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid filter expression '{input}': {message} at offset {offset}")]
pub struct SyntaxError {
    /// The complete filter text that failed to parse
    pub input: String,
    /// Character offset of the offending token
    pub offset: usize,
    /// Human readable reason
    pub message: String,
}

/// Failure reported by a view-resolution or unwrapped-field collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectionError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Introspection of {type_name} failed: {reason}")]
    Failed { type_name: String, reason: String },
}

/// Top-level error for the purifier engine
#[derive(Debug, thiserror::Error)]
pub enum PurifierError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl PurifierError {
    /// Whether the error came from parsing the filter expression
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, PurifierError::Syntax(_))
    }
}
