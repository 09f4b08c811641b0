//! Filter contexts and their providers
//!
//! A [`FilterContext`] binds one filter string to its lazily parsed
//! expression for a single serialization pass. A [`ContextProvider`] decides
//! which filter applies and whether filtering is enabled at all.

mod filter_context;
mod holder;
mod provider;

pub use filter_context::FilterContext;
pub use holder::{FilterGuard, FilterHolder};
pub use provider::{ContextProvider, ScopedContextProvider, SimpleContextProvider};
