//! Core BoundedCache structure and initialization
//!
//! Lock-free storage using crossbeam SkipMap with atomic counters for
//! concurrent operations.

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use crossbeam_skiplist::SkipMap;

use super::super::{
    cache_config::CacheSpec,
    cache_entry::CacheEntry,
    cache_stats::{CacheStats, CacheStatsSnapshot},
};

/// Lock-free bounded cache; values are cloned out on lookup
pub struct BoundedCache<K, V> {
    /// Main cache storage (key -> entry)
    pub(super) entries: SkipMap<K, CacheEntry<V>>,
    /// Sizing and expiry
    pub(super) spec: CacheSpec,
    /// Reference point for entry timestamps
    pub(super) epoch: Instant,
    /// Cache statistics
    pub(super) stats: CacheStats,
    /// Cleanup pass running flag
    pub(super) cleanup_running: AtomicBool,
}

impl<K, V> BoundedCache<K, V>
where
    K: Ord + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Create new cache from a spec
    pub fn new(spec: CacheSpec) -> Self {
        Self {
            entries: SkipMap::new(),
            spec,
            epoch: Instant::now(),
            stats: CacheStats::default(),
            cleanup_running: AtomicBool::new(false),
        }
    }

    pub fn spec(&self) -> &CacheSpec {
        &self.spec
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Counters plus the current entry count
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Nanoseconds since the cache was created
    #[inline]
    pub(super) fn now(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    pub(super) fn is_expired(&self, entry: &CacheEntry<V>, now: u64) -> bool {
        let elapsed = |since: u64| Duration::from_nanos(now.saturating_sub(since));

        self.spec
            .expire_after_write
            .is_some_and(|ttl| elapsed(entry.written_at) >= ttl)
            || self
                .spec
                .expire_after_access
                .is_some_and(|ttl| elapsed(entry.last_accessed()) >= ttl)
    }
}

impl<K, V> std::fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedCache")
            .field("spec", &self.spec)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
