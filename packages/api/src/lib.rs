//! Purifier Public API
//!
//! Selective JSON field filtering driven by a compact field-selection DSL.
//! A filter such as `id,customer{name,email}` is parsed once per pass and
//! decides, field by field, what a response writes.
//!
//! ```rust
//! use purifier::prelude::*;
//! use serde_json::json;
//!
//! let introspector = BeanInfoIntrospector::global();
//! introspector.register(BeanInfo::builder("Doc").plain("id").plain("title").plain("body"));
//!
//! let purified = Purifier::json()
//!     .purify_with_provider(
//!         &json!({"id": 1, "title": "t", "body": "b"}),
//!         &RuntimeType::concrete("Doc"),
//!         &Purifier::provider("id,title"),
//!     )
//!     .unwrap();
//! assert_eq!(purified, json!({"id": 1, "title": "t"}));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod json;
pub mod prelude;
pub mod web;

// Re-export the engine
pub use purifier_engine::{
    PurifierError, PurifierFilter, PurifierResult, cache, config, context, error, filter, introspect, matcher,
    node, parser, path, telemetry,
};

use purifier_engine::context::SimpleContextProvider;
use purifier_engine::telemetry::{MetricsMap, PurifierMetrics};

/// Main Purifier entry point providing static constructors
pub struct Purifier;

impl Purifier {
    /// JSON host over the process-wide introspector and caches
    pub fn json() -> json::JsonPurifier {
        json::JsonPurifier::global()
    }

    /// Provider with one fixed filter, using the process-wide parser
    pub fn provider(filter: &str) -> SimpleContextProvider {
        SimpleContextProvider::with_filter(filter)
    }

    /// Request provider reading the `fields` query parameter
    pub fn request() -> web::RequestContextProvider {
        web::RequestContextProvider::default()
    }

    /// Current engine metrics, sorted by name
    pub fn metrics() -> MetricsMap {
        PurifierMetrics::as_map()
    }
}
