//! Purifier error handling module
//!
//! Error types for parsing filter expressions, consulting introspection
//! collaborators and loading configuration.

mod constructors;
mod types;

pub use types::{IntrospectionError, PurifierError, PurifierResult, SyntaxError};
