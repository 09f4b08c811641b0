//! Metrics sources

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::cache::{CacheStatsSnapshot, MatchCache};
use crate::introspect::BeanInfoIntrospector;
use crate::parser::PurifierParser;

/// Sorted metric name to value map
pub type MetricsMap = BTreeMap<String, Value>;

/// Something that contributes metrics
pub trait MetricsSource: Send + Sync {
    fn apply_metrics(&self, map: &mut MetricsMap);
}

/// Sources applied in order; later sources overwrite duplicate names
#[derive(Default)]
pub struct CompositeMetricsSource {
    sources: Vec<Box<dyn MetricsSource>>,
}

impl CompositeMetricsSource {
    pub fn new(sources: Vec<Box<dyn MetricsSource>>) -> Self {
        Self { sources }
    }

    #[must_use]
    pub fn with(mut self, source: impl MetricsSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl MetricsSource for CompositeMetricsSource {
    fn apply_metrics(&self, map: &mut MetricsMap) {
        for source in &self.sources {
            source.apply_metrics(map);
        }
    }
}

/// Counters of one bounded cache under a name prefix
pub struct CacheMetricsSource {
    prefix: String,
    snapshot: Box<dyn Fn() -> CacheStatsSnapshot + Send + Sync>,
}

impl CacheMetricsSource {
    pub fn new(prefix: impl Into<String>, snapshot: impl Fn() -> CacheStatsSnapshot + Send + Sync + 'static) -> Self {
        Self {
            prefix: prefix.into(),
            snapshot: Box::new(snapshot),
        }
    }

    pub fn parser(prefix: impl Into<String>, parser: Arc<PurifierParser>) -> Self {
        Self::new(prefix, move || parser.stats())
    }

    pub fn match_cache(prefix: impl Into<String>, cache: Arc<MatchCache>) -> Self {
        Self::new(prefix, move || cache.stats())
    }
}

impl MetricsSource for CacheMetricsSource {
    fn apply_metrics(&self, map: &mut MetricsMap) {
        let stats = (self.snapshot)();
        let mut put = |name: &str, value: Value| {
            map.insert(format!("{}{name}", self.prefix), value);
        };

        put("hitCount", stats.hits.into());
        put("missCount", stats.misses.into());
        put("requestCount", stats.requests().into());
        put("evictionCount", stats.evictions.into());
        put("size", stats.entries.into());
        put("hitRate", stats.hit_ratio().into());
        let miss_rate = if stats.requests() == 0 { 0.0 } else { 1.0 - stats.hit_ratio() };
        put("missRate", miss_rate.into());
    }
}

/// Registry counters of a [`BeanInfoIntrospector`]
pub struct IntrospectorMetricsSource {
    prefix: String,
    introspector: Arc<BeanInfoIntrospector>,
}

impl IntrospectorMetricsSource {
    pub fn new(prefix: impl Into<String>, introspector: Arc<BeanInfoIntrospector>) -> Self {
        Self {
            prefix: prefix.into(),
            introspector,
        }
    }
}

impl MetricsSource for IntrospectorMetricsSource {
    fn apply_metrics(&self, map: &mut MetricsMap) {
        let (lookups, unknown) = self.introspector.lookup_counts();
        map.insert(format!("{}lookupCount", self.prefix), lookups.into());
        map.insert(format!("{}unknownTypeCount", self.prefix), unknown.into());
        map.insert(format!("{}size", self.prefix), self.introspector.len().into());
    }
}
