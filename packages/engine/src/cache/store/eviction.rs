//! Cache eviction and cleanup operations
//!
//! LRU eviction and expired entry cleanup using lock-free patterns for
//! concurrent cache maintenance.

use std::sync::atomic::Ordering;

use super::core::BoundedCache;

impl<K, V> BoundedCache<K, V>
where
    K: Ord + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Evict least recently used entries until below `limit`
    /// Returns the number of entries actually evicted
    pub(super) fn evict_lru_entries(&self, limit: usize) -> usize {
        let mut candidates: Vec<(K, u64)> = self
            .entries
            .iter()
            .map(|entry_ref| (entry_ref.key().clone(), entry_ref.value().last_accessed()))
            .collect();

        // Sort by last accessed (oldest first)
        candidates.sort_by_key(|(_, last_accessed)| *last_accessed);

        // Evict oldest 25% of entries or until under the limit
        let target_evictions = (candidates.len() / 4).max(1);
        let mut evicted_count = 0;

        for (key, _) in candidates.iter().take(target_evictions) {
            if self.entries.remove(key).is_some() {
                self.stats.record_eviction();
                evicted_count += 1;

                if self.entries.len() < limit {
                    break;
                }
            }
        }

        tracing::debug!(
            target: "purifier::cache",
            evicted = evicted_count,
            remaining = self.entries.len(),
            limit,
            "Evicted least recently used entries"
        );

        evicted_count
    }

    /// Clean up expired entries
    pub fn cleanup_expired(&self) {
        if self
            .cleanup_running
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return; // Cleanup already running
        }

        let now = self.now();
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|entry_ref| self.is_expired(entry_ref.value(), now))
            .map(|entry_ref| entry_ref.key().clone())
            .collect();

        for key in &expired_keys {
            if self.entries.remove(key).is_some() {
                self.stats.record_eviction();
            }
        }

        if !expired_keys.is_empty() {
            tracing::trace!(
                target: "purifier::cache",
                expired = expired_keys.len(),
                "Removed expired entries"
            );
        }

        self.cleanup_running.store(false, Ordering::Release);
    }
}
