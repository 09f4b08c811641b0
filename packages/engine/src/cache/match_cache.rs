//! Memoized match outcomes keyed by path identity and filter string

use std::sync::{Arc, LazyLock};

use super::cache_config::CacheSpec;
use super::cache_key::MatchKey;
use super::cache_stats::CacheStatsSnapshot;
use super::store::BoundedCache;
use crate::config::PurifierConfig;
use crate::path::Path;

/// Process-wide match cache sized by the global configuration
pub static GLOBAL_MATCH_CACHE: LazyLock<Arc<MatchCache>> =
    LazyLock::new(|| Arc::new(MatchCache::new(PurifierConfig::global().filter_path_cache.clone())));

/// Path and filter to include/exclude memo
///
/// Paths whose terminal type is a map or absent are never stored, since the
/// same dotted id can resolve differently below dynamic keys.
#[derive(Debug)]
pub struct MatchCache {
    store: BoundedCache<MatchKey, bool>,
}

impl MatchCache {
    #[must_use]
    pub fn new(spec: CacheSpec) -> Self {
        Self {
            store: BoundedCache::new(spec),
        }
    }

    #[must_use]
    pub fn global() -> Arc<MatchCache> {
        Arc::clone(&GLOBAL_MATCH_CACHE)
    }

    /// Cached outcome, `None` on a miss or for non-cacheable paths
    pub fn get(&self, path: &Path, filter: &str) -> Option<bool> {
        if !path.is_cacheable() {
            return None;
        }
        self.store.get(&MatchKey::new(path, filter))
    }

    pub fn insert(&self, path: &Path, filter: &str, included: bool) {
        if path.is_cacheable() {
            self.store.insert(MatchKey::new(path, filter), included);
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.store.snapshot()
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}
