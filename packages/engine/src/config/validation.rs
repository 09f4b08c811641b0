//! Configuration validation

use crate::cache::CacheSpec;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid cache spec: {0}")]
    InvalidCacheSpec(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidCacheSpec` - if a cache capacity exceeds the supported limit
    /// - `InvalidParameter` - if a parameter is outside its valid range
    fn validate(&self) -> ConfigResult<()>;
}

/// Largest supported cache capacity
pub const MAX_CACHE_ENTRIES: usize = 1 << 24;

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a cache spec
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCacheSpec` if the maximum size
    /// exceeds [`MAX_CACHE_ENTRIES`].
    pub fn validate_cache_spec(spec: &CacheSpec, name: &str) -> ConfigResult<()> {
        if let Some(size) = spec.maximum_size
            && size > MAX_CACHE_ENTRIES
        {
            return Err(ConfigurationError::InvalidCacheSpec(format!(
                "{name} maximumSize {size} exceeds {MAX_CACHE_ENTRIES}"
            )));
        }
        Ok(())
    }

    /// Parse a boolean setting
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` for anything other than
    /// `true`/`false`/`1`/`0`/`yes`/`no`.
    pub fn parse_bool(value: &str, name: &str) -> ConfigResult<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(ConfigurationError::InvalidParameter(format!(
                "{name} expects a boolean, got '{other}'"
            ))),
        }
    }
}
