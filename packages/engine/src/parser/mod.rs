//! Filter expression parsing
//!
//! [`parse_expression`] turns filter text into a [`FilterExpression`]. The
//! [`PurifierParser`] front memoizes the result per filter string in a
//! bounded cache so hot filters are parsed once per process.

mod core;
mod tokenizer;
mod tokens;

use std::sync::{Arc, LazyLock};

pub use self::core::{MAX_NESTING_DEPTH, parse_expression};
pub use self::tokenizer::tokenize;
pub use self::tokens::{Spanned, Token};
use crate::cache::{BoundedCache, CacheSpec, CacheStatsSnapshot};
use crate::config::PurifierConfig;
use crate::error::SyntaxError;
use crate::node::FilterExpression;

static GLOBAL_PARSER: LazyLock<Arc<PurifierParser>> =
    LazyLock::new(|| Arc::new(PurifierParser::new(PurifierConfig::global().parser_node_cache.clone())));

/// Caching parser front
#[derive(Debug)]
pub struct PurifierParser {
    cache: BoundedCache<String, Arc<FilterExpression>>,
}

impl Default for PurifierParser {
    fn default() -> Self {
        Self::new(CacheSpec::bounded(1000))
    }
}

impl PurifierParser {
    #[must_use]
    pub fn new(spec: CacheSpec) -> Self {
        Self {
            cache: BoundedCache::new(spec),
        }
    }

    /// Process-wide parser sized by the global configuration
    #[must_use]
    pub fn global() -> Arc<PurifierParser> {
        Arc::clone(&GLOBAL_PARSER)
    }

    /// Parse `filter`, reusing a cached expression when present
    ///
    /// Syntax errors are not cached.
    ///
    /// # Errors
    ///
    /// Returns a `SyntaxError` for malformed filter text.
    pub fn parse(&self, filter: &str) -> Result<Arc<FilterExpression>, SyntaxError> {
        self.cache.get_or_insert_with(filter.to_string(), || {
            log::debug!("Parsing filter expression '{filter}'");
            parse_expression(filter).map(Arc::new)
        })
    }

    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.cache.snapshot()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_filters_hit_the_cache() {
        let parser = PurifierParser::default();
        let first = parser.parse("id,name").expect("valid");
        let second = parser.parse("id,name").expect("valid");

        assert!(Arc::ptr_eq(&first, &second));
        let stats = parser.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
    }

    #[test]
    fn errors_are_not_cached() {
        let parser = PurifierParser::default();
        assert!(parser.parse("a{").is_err());
        assert!(parser.parse("a{").is_err());
        assert_eq!(parser.stats().entries, 0);
        assert_eq!(parser.stats().misses, 2);
    }

    #[test]
    fn disabled_cache_still_parses() {
        let parser = PurifierParser::new(CacheSpec::disabled());
        let first = parser.parse("id").expect("valid");
        let second = parser.parse("id").expect("valid");
        assert_eq!(first, second);
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
