//! Cache lookup and insertion

use super::super::cache_entry::CacheEntry;
use super::core::BoundedCache;

impl<K, V> BoundedCache<K, V>
where
    K: Ord + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Look up a live entry, refreshing its access time
    pub fn get(&self, key: &K) -> Option<V> {
        if self.spec.is_disabled() {
            self.stats.record_miss();
            return None;
        }

        let now = self.now();
        let Some(entry_ref) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if self.is_expired(entry_ref.value(), now) {
            entry_ref.remove();
            self.stats.record_eviction();
            self.stats.record_miss();
            return None;
        }

        entry_ref.value().touch(now);
        self.stats.record_hit();
        Some(entry_ref.value().value.clone())
    }

    /// Store a value, making room first when the cache is full
    pub fn insert(&self, key: K, value: V) {
        let Some(limit) = self.spec.maximum_size else {
            self.entries.insert(key, CacheEntry::new(value, self.now()));
            return;
        };
        if limit == 0 {
            return;
        }

        if self.entries.len() >= limit && !self.entries.contains_key(&key) {
            self.cleanup_expired();
            if self.entries.len() >= limit {
                self.evict_lru_entries(limit);
            }
        }

        self.entries.insert(key, CacheEntry::new(value, self.now()));
    }

    /// Look up or compute and store
    ///
    /// Concurrent callers may compute the same value twice; the last insert
    /// wins.
    pub fn get_or_insert_with<E>(&self, key: K, compute: impl FnOnce() -> Result<V, E>) -> Result<V, E> {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value().value.clone())
    }
}
