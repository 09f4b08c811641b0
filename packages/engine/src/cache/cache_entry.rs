//! Cache entry with write and access timestamps

use std::sync::atomic::{AtomicU64, Ordering};

/// Stored value plus timestamps, in nanoseconds since the owning cache's epoch
#[derive(Debug)]
pub struct CacheEntry<V> {
    pub value: V,
    pub written_at: u64,
    pub last_accessed: AtomicU64,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, now: u64) -> Self {
        Self {
            value,
            written_at: now,
            last_accessed: AtomicU64::new(now),
        }
    }

    /// Update last access timestamp
    #[inline]
    pub fn touch(&self, now: u64) {
        self.last_accessed.store(now, Ordering::Relaxed);
    }

    #[inline]
    pub fn last_accessed(&self) -> u64 {
        self.last_accessed.load(Ordering::Relaxed)
    }
}
