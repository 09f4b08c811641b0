//! Engine settings and their loading

use std::sync::OnceLock;

use serde::Deserialize;

use super::validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
use crate::cache::CacheSpec;

static GLOBAL_CONFIG: OnceLock<PurifierConfig> = OnceLock::new();

/// Environment variable prefix read by [`PurifierConfig::from_env`]
pub const ENV_PREFIX: &str = "PURIFIER_";

/// Purifier engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PurifierConfig {
    /// Match cache sizing and expiry
    pub filter_path_cache: CacheSpec,
    /// Parsed expression cache sizing and expiry
    pub parser_node_cache: CacheSpec,
    /// Push matched view labels into nested levels
    pub propagate_view_to_nested_filters: bool,
    /// Select base-view fields below a matched node with no nested filter
    pub implicitly_include_base_fields: bool,
    /// Put fields without an explicit view into the base view
    pub add_non_annotated_fields_to_base_view: bool,
}

impl Default for PurifierConfig {
    fn default() -> Self {
        Self {
            filter_path_cache: CacheSpec::bounded(1000)
                .expire_after_access(std::time::Duration::from_secs(300)),
            parser_node_cache: CacheSpec::bounded(1000),
            propagate_view_to_nested_filters: false,
            implicitly_include_base_fields: true,
            add_non_annotated_fields_to_base_view: true,
        }
    }
}

impl PurifierConfig {
    /// Process-wide configuration; the default unless [`install`](Self::install)
    /// ran first
    pub fn global() -> &'static PurifierConfig {
        GLOBAL_CONFIG.get_or_init(PurifierConfig::default)
    }

    /// Install the process-wide configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Conflict` if a configuration was already
    /// installed or read, and any validation error of `config`.
    pub fn install(config: PurifierConfig) -> ConfigResult<()> {
        config.validate()?;
        GLOBAL_CONFIG.set(config).map_err(|_| {
            ConfigurationError::Conflict("purifier configuration is already initialized".into())
        })
    }

    /// Parse from a JSON document; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` for malformed JSON and
    /// any validation error.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: PurifierConfig = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidParameter(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `PURIFIER_*` environment variables over the defaults
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` for unparsable values.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary key lookup using the environment variable names
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` for unparsable values.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |suffix: &str| {
            let name = format!("{ENV_PREFIX}{suffix}");
            lookup(&name).map(|value| (name, value))
        };

        if let Some((_, value)) = var("FILTER_PATH_CACHE") {
            config.filter_path_cache = value.parse()?;
        }
        if let Some((_, value)) = var("PARSER_NODE_CACHE") {
            config.parser_node_cache = value.parse()?;
        }
        if let Some((name, value)) = var("PROPAGATE_VIEW_TO_NESTED_FILTERS") {
            config.propagate_view_to_nested_filters = ConfigValidator::parse_bool(&value, &name)?;
        }
        if let Some((name, value)) = var("IMPLICITLY_INCLUDE_BASE_FIELDS") {
            config.implicitly_include_base_fields = ConfigValidator::parse_bool(&value, &name)?;
        }
        if let Some((name, value)) = var("ADD_NON_ANNOTATED_FIELDS_TO_BASE_VIEW") {
            config.add_non_annotated_fields_to_base_view =
                ConfigValidator::parse_bool(&value, &name)?;
        }

        config.validate()?;
        log::debug!("Loaded purifier configuration: {config:?}");
        Ok(config)
    }

    #[must_use]
    pub fn with_filter_path_cache(mut self, spec: CacheSpec) -> Self {
        self.filter_path_cache = spec;
        self
    }

    #[must_use]
    pub fn with_parser_node_cache(mut self, spec: CacheSpec) -> Self {
        self.parser_node_cache = spec;
        self
    }

    #[must_use]
    pub fn with_view_propagation(mut self, enabled: bool) -> Self {
        self.propagate_view_to_nested_filters = enabled;
        self
    }

    #[must_use]
    pub fn with_implicit_base_fields(mut self, enabled: bool) -> Self {
        self.implicitly_include_base_fields = enabled;
        self
    }
}

impl Validator for PurifierConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_cache_spec(&self.filter_path_cache, "filter_path_cache")?;
        ConfigValidator::validate_cache_spec(&self.parser_node_cache, "parser_node_cache")?;
        Ok(())
    }
}
