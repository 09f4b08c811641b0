//! Purifier configuration
//!
//! Read-only settings consumed by the engine: cache specs for the match and
//! parser caches, and the two matcher switches. A process-wide instance is
//! installed once at startup and read everywhere through
//! [`PurifierConfig::global`].

mod purifier_config;
mod validation;

pub use purifier_config::PurifierConfig;
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
