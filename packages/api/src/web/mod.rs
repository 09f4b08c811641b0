//! Request binding
//!
//! Resolves the filter of one HTTP exchange from its query string, with a
//! configured default, and enables filtering only for successful responses.

mod binding;
mod provider;

pub use binding::{FilterCustomizer, RequestBinding, RequestInfo};
pub use provider::{DEFAULT_FILTER_PARAM, RequestConfig, RequestContextProvider};
