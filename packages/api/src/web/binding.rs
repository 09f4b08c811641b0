//! One bound request

use std::sync::{Arc, Mutex, PoisonError};

use hashbrown::HashMap;
use http::{HeaderMap, Method, StatusCode, Uri};
use purifier_engine::context::ContextProvider;
use purifier_engine::node::ANY_DEEP;
use purifier_engine::parser::PurifierParser;
use purifier_engine::path::RuntimeType;

use super::provider::RequestContextProvider;

/// Borrowed view of the request head
#[derive(Debug, Clone, Copy)]
pub struct RequestInfo<'r> {
    pub method: &'r Method,
    pub uri: &'r Uri,
    pub headers: &'r HeaderMap,
}

/// Hook adjusting the resolved filter per request and root type
pub trait FilterCustomizer: Send + Sync {
    /// Filter to apply given the requested (or default) one
    fn customize(
        &self,
        filter: Option<&str>,
        request: &RequestInfo<'_>,
        root_type: Option<&RuntimeType>,
    ) -> Option<String>;
}

impl<F> FilterCustomizer for F
where
    F: Fn(Option<&str>, &RequestInfo<'_>, Option<&RuntimeType>) -> Option<String> + Send + Sync,
{
    fn customize(
        &self,
        filter: Option<&str>,
        request: &RequestInfo<'_>,
        root_type: Option<&RuntimeType>,
    ) -> Option<String> {
        self(filter, request, root_type)
    }
}

/// Context provider for the lifetime of one exchange
///
/// The customized filter is memoized per root type, so the customizer runs
/// once per type and response.
pub struct RequestBinding<'r> {
    provider: &'r RequestContextProvider,
    request: RequestInfo<'r>,
    status: StatusCode,
    requested: Option<String>,
    resolved: Mutex<HashMap<Option<RuntimeType>, Option<Arc<str>>>>,
}

impl<'r> RequestBinding<'r> {
    pub(super) fn new(provider: &'r RequestContextProvider, request: RequestInfo<'r>, status: StatusCode) -> Self {
        let requested = query_param(request.uri, &provider.config.filter_param);
        Self {
            provider,
            request,
            status,
            requested,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// The filter named in the query string, if any
    pub fn requested_filter(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn resolve(&self, root_type: Option<&RuntimeType>) -> Option<Arc<str>> {
        let filter = self
            .requested
            .as_deref()
            .or(self.provider.config.default_filter.as_deref());

        let customized = match &self.provider.customizer {
            Some(customizer) => customizer.customize(filter, &self.request, root_type),
            None => filter.map(str::to_string),
        };
        customized.map(Arc::from)
    }
}

impl ContextProvider for RequestBinding<'_> {
    fn filter_for(&self, root_type: Option<&RuntimeType>) -> Option<Arc<str>> {
        let mut resolved = self.resolved.lock().unwrap_or_else(PoisonError::into_inner);
        resolved
            .entry(root_type.cloned())
            .or_insert_with(|| self.resolve(root_type))
            .clone()
    }

    fn parser(&self) -> &Arc<PurifierParser> {
        &self.provider.parser
    }

    fn is_filtering_enabled(&self) -> bool {
        if !self.status.is_success() {
            return false;
        }
        match self.requested.as_deref() {
            Some(filter) => filter != ANY_DEEP,
            None => self
                .provider
                .config
                .default_filter
                .as_deref()
                .is_some_and(|filter| filter != ANY_DEEP),
        }
    }
}

/// First value of `param` in the query string
fn query_param(uri: &Uri, param: &str) -> Option<String> {
    let query = uri.query()?;
    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs
            .into_iter()
            .find_map(|(name, value)| (name == param).then_some(value)),
        Err(e) => {
            tracing::warn!(
                target: "purifier::web",
                query,
                error = %e,
                "Ignoring malformed query string"
            );
            None
        }
    }
}
