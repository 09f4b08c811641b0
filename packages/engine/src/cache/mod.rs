//! Lock-free bounded caches
//!
//! This module provides the process-wide match cache and the bounded store
//! it shares with the parser:
//! - Lock-free SkipMap for O(log n) concurrent operations
//! - Atomic counters for hit, miss and eviction statistics
//! - Expiry after write or after last access
//! - LRU eviction by last access time

pub mod cache_config;
pub mod cache_entry;
pub mod cache_key;
pub mod cache_stats;
pub mod match_cache;
pub mod store;

pub use cache_config::CacheSpec;
pub use cache_key::MatchKey;
pub use cache_stats::{CacheStats, CacheStatsSnapshot};
pub use match_cache::{GLOBAL_MATCH_CACHE, MatchCache};
pub use store::BoundedCache;
