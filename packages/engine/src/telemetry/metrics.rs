//! Process-wide metrics view

use std::sync::LazyLock;

use super::sources::{
    CacheMetricsSource, CompositeMetricsSource, IntrospectorMetricsSource, MetricsMap, MetricsSource,
};
use crate::cache::MatchCache;
use crate::introspect::BeanInfoIntrospector;
use crate::parser::PurifierParser;

pub const PARSER_PREFIX: &str = "purifier.parser.nodeCache.";
pub const MATCH_CACHE_PREFIX: &str = "purifier.filter.pathCache.";
pub const INTROSPECTOR_PREFIX: &str = "purifier.introspector.";

static GLOBAL_SOURCE: LazyLock<CompositeMetricsSource> = LazyLock::new(|| {
    CompositeMetricsSource::default()
        .with(CacheMetricsSource::parser(PARSER_PREFIX, PurifierParser::global()))
        .with(CacheMetricsSource::match_cache(MATCH_CACHE_PREFIX, MatchCache::global()))
        .with(IntrospectorMetricsSource::new(
            INTROSPECTOR_PREFIX,
            BeanInfoIntrospector::global(),
        ))
});

/// Metrics of the process-wide parser, match cache and introspector
pub struct PurifierMetrics;

impl PurifierMetrics {
    /// Current values, sorted by name
    pub fn as_map() -> MetricsMap {
        let mut map = MetricsMap::new();
        GLOBAL_SOURCE.apply_metrics(&mut map);
        map
    }
}
