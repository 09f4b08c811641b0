//! Error constructor helpers
//!
//! Factory methods used by the parser and the introspection registry.

use super::types::{IntrospectionError, SyntaxError};

impl SyntaxError {
    /// Creates a syntax error for `input` at character `offset`
    ///
    /// # Examples
    /// ```
    /// use purifier_engine::error::SyntaxError;
    ///
    /// let error = SyntaxError::new("user{name", 9, "unbalanced '{'");
    /// assert_eq!(error.offset, 9);
    /// ```
    pub fn new(input: impl Into<String>, offset: usize, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            offset,
            message: message.into(),
        }
    }
}

impl IntrospectionError {
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        IntrospectionError::UnknownType(type_name.into())
    }

    pub fn failed(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        IntrospectionError::Failed {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
