//! The property filter asked once per candidate field

use std::sync::Arc;

use crate::cache::MatchCache;
use crate::config::PurifierConfig;
use crate::context::{ContextProvider, FilterContext};
use crate::error::PurifierResult;
use crate::introspect::{BeanInfoIntrospector, Introspector};
use crate::matcher::{MatchOptions, Matcher};
use crate::node::ANY_DEEP;
use crate::path::Path;

/// Combines the reserved-literal short circuit, the match cache and the
/// matcher
///
/// Instances sharing a [`MatchCache`] must agree on the introspector and the
/// match options, since the cache key covers only the path and filter.
#[derive(Clone)]
pub struct PurifierFilter {
    introspector: Arc<dyn Introspector>,
    cache: Arc<MatchCache>,
    options: MatchOptions,
}

impl std::fmt::Debug for PurifierFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurifierFilter")
            .field("cache", &self.cache)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl PurifierFilter {
    /// Filter with a private cache sized by `config`
    pub fn new(introspector: Arc<dyn Introspector>, config: &PurifierConfig) -> Self {
        Self {
            introspector,
            cache: Arc::new(MatchCache::new(config.filter_path_cache.clone())),
            options: MatchOptions::from(config),
        }
    }

    /// Filter over the process-wide introspector, cache and configuration
    pub fn global() -> Self {
        let introspector: Arc<dyn Introspector> = BeanInfoIntrospector::global();
        Self {
            introspector,
            cache: MatchCache::global(),
            options: MatchOptions::from(PurifierConfig::global()),
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Arc<MatchCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<MatchCache> {
        &self.cache
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Include or exclude the last field of `path` under `context`
    ///
    /// # Errors
    ///
    /// Returns `PurifierError::Syntax` for a malformed filter and
    /// `PurifierError::Introspection` when a type lookup fails.
    pub fn include(&self, context: &FilterContext, path: &Path) -> PurifierResult<bool> {
        if path.is_empty() {
            return Ok(true);
        }
        let filter = context.filter();
        if filter == ANY_DEEP {
            return Ok(true);
        }

        if let Some(included) = self.cache.get(path, filter) {
            return Ok(included);
        }

        let expression = context.expression()?;
        let included = Matcher::new(self.introspector.as_ref(), self.options).matches(path, &expression)?;
        self.cache.insert(path, filter, included);

        tracing::trace!(
            target: "purifier::filter",
            path = path.key().id(),
            filter,
            included,
            cacheable = path.is_cacheable(),
            "Computed field decision"
        );
        Ok(included)
    }

    /// [`include`](Self::include) with a context from `provider`
    ///
    /// Everything is included while the provider reports filtering disabled.
    ///
    /// # Errors
    ///
    /// As [`include`](Self::include).
    pub fn include_with_provider(&self, provider: &dyn ContextProvider, path: &Path) -> PurifierResult<bool> {
        if !provider.is_filtering_enabled() {
            return Ok(true);
        }
        let Some(first) = path.first() else {
            return Ok(true);
        };
        let context = provider.context(first.runtime_type());
        self.include(&context, path)
    }
}
