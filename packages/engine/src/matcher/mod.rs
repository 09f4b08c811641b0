//! Path against expression matching
//!
//! The [`Matcher`] folds over a [`Path`](crate::path::Path) from root to
//! leaf, narrowing the candidate nodes level by level. View labels and
//! unwrapped fields are resolved through an
//! [`Introspector`](crate::introspect::Introspector).

mod core;
mod views;

pub use self::core::Matcher;
pub use self::views::BASE_VIEW_NODES;
use crate::config::PurifierConfig;

/// The matcher switches taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Push matched view labels into nested levels
    pub propagate_view_to_nested_filters: bool,
    /// Fall back to the base view below nodes without nested filter
    pub implicitly_include_base_fields: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::from(&PurifierConfig::default())
    }
}

impl From<&PurifierConfig> for MatchOptions {
    fn from(config: &PurifierConfig) -> Self {
        Self {
            propagate_view_to_nested_filters: config.propagate_view_to_nested_filters,
            implicitly_include_base_fields: config.implicitly_include_base_fields,
        }
    }
}
