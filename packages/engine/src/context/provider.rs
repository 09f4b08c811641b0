//! Context providers

use std::sync::Arc;

use super::filter_context::FilterContext;
use super::holder::FilterHolder;
use crate::node::ANY_DEEP;
use crate::parser::PurifierParser;
use crate::path::RuntimeType;

/// Source of the filter for a serialization pass
pub trait ContextProvider: Send + Sync {
    /// Filter for a pass rooted at `root_type`; `None` means no filter
    fn filter_for(&self, root_type: Option<&RuntimeType>) -> Option<Arc<str>>;

    /// Parser used by the contexts this provider creates
    fn parser(&self) -> &Arc<PurifierParser>;

    /// Whether fields should be filtered at all
    fn is_filtering_enabled(&self) -> bool {
        true
    }

    /// Fresh context for a pass; an absent filter selects everything
    fn context(&self, root_type: Option<&RuntimeType>) -> FilterContext {
        let filter = self
            .filter_for(root_type)
            .unwrap_or_else(|| Arc::from(ANY_DEEP));
        FilterContext::new(filter, root_type.cloned(), Arc::clone(self.parser()))
    }
}

fn is_active(filter: Option<&str>) -> bool {
    filter.is_some_and(|filter| filter != ANY_DEEP)
}

/// Provider with one fixed filter
#[derive(Debug, Clone)]
pub struct SimpleContextProvider {
    filter: Option<Arc<str>>,
    parser: Arc<PurifierParser>,
}

impl SimpleContextProvider {
    pub fn new(filter: Option<&str>, parser: Arc<PurifierParser>) -> Self {
        Self {
            filter: filter.map(Arc::from),
            parser,
        }
    }

    /// Fixed filter with the process-wide parser
    pub fn with_filter(filter: &str) -> Self {
        Self::new(Some(filter), PurifierParser::global())
    }
}

impl ContextProvider for SimpleContextProvider {
    fn filter_for(&self, _root_type: Option<&RuntimeType>) -> Option<Arc<str>> {
        self.filter.clone()
    }

    fn parser(&self) -> &Arc<PurifierParser> {
        &self.parser
    }

    fn is_filtering_enabled(&self) -> bool {
        is_active(self.filter.as_deref())
    }
}

/// Provider reading the filter installed through [`FilterHolder`]
#[derive(Debug, Clone)]
pub struct ScopedContextProvider {
    parser: Arc<PurifierParser>,
}

impl Default for ScopedContextProvider {
    fn default() -> Self {
        Self::new(PurifierParser::global())
    }
}

impl ScopedContextProvider {
    pub fn new(parser: Arc<PurifierParser>) -> Self {
        Self { parser }
    }
}

impl ContextProvider for ScopedContextProvider {
    fn filter_for(&self, _root_type: Option<&RuntimeType>) -> Option<Arc<str>> {
        FilterHolder::current()
    }

    fn parser(&self) -> &Arc<PurifierParser> {
        &self.parser
    }

    fn is_filtering_enabled(&self) -> bool {
        is_active(FilterHolder::current().as_deref())
    }
}
