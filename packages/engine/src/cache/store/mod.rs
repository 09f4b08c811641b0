//! Generic bounded cache over a lock-free skip list
//!
//! Decomposed into:
//! - `core`: structure and construction
//! - `operations`: lookup and insertion
//! - `eviction`: LRU eviction and expiry cleanup

pub mod core;
pub mod eviction;
pub mod operations;

pub use core::BoundedCache;
