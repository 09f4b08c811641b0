//! Match cache keys

use std::sync::Arc;

use crate::path::{Path, PathKey};

/// Key of one memoized match: the path identity and the filter string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    pub path: PathKey,
    pub filter: Arc<str>,
}

impl MatchKey {
    #[must_use]
    pub fn new(path: &Path, filter: &str) -> Self {
        Self {
            path: path.key().clone(),
            filter: Arc::from(filter),
        }
    }
}
