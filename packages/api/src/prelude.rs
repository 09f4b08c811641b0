//! Purifier Prelude
//!
//! Essential types for filtering JSON responses.

pub use purifier_engine::prelude::*;

pub use crate::Purifier;
pub use crate::json::{Excluded, JsonPurifier};
pub use crate::web::{FilterCustomizer, RequestBinding, RequestConfig, RequestContextProvider, RequestInfo};
