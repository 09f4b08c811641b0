//! Engine metrics
//!
//! Counters are exposed as a sorted map under stable dotted names so hosts
//! can forward them to whatever metrics backend they run.

mod metrics;
mod sources;

pub use metrics::PurifierMetrics;
pub use sources::{
    CacheMetricsSource, CompositeMetricsSource, IntrospectorMetricsSource, MetricsMap, MetricsSource,
};
