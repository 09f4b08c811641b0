//! Request context provider configuration

use std::sync::Arc;

use http::{Request, StatusCode};
use purifier_engine::parser::PurifierParser;
use serde::Deserialize;

use super::binding::{FilterCustomizer, RequestBinding, RequestInfo};

/// Query parameter read when nothing else is configured
pub const DEFAULT_FILTER_PARAM: &str = "fields";

fn default_filter_param() -> String {
    DEFAULT_FILTER_PARAM.to_string()
}

/// Serializable request binding settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestConfig {
    /// Query parameter carrying the filter
    #[serde(default = "default_filter_param")]
    pub filter_param: String,
    /// Filter used when the request carries none
    #[serde(default)]
    pub default_filter: Option<String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            filter_param: default_filter_param(),
            default_filter: None,
        }
    }
}

/// Builds per-request [`RequestBinding`]s
#[derive(Clone)]
pub struct RequestContextProvider {
    pub(super) config: RequestConfig,
    pub(super) parser: Arc<PurifierParser>,
    pub(super) customizer: Option<Arc<dyn FilterCustomizer>>,
}

impl std::fmt::Debug for RequestContextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContextProvider")
            .field("config", &self.config)
            .field("customized", &self.customizer.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for RequestContextProvider {
    fn default() -> Self {
        Self::from_config(RequestConfig::default())
    }
}

impl RequestContextProvider {
    pub fn from_config(config: RequestConfig) -> Self {
        Self {
            config,
            parser: PurifierParser::global(),
            customizer: None,
        }
    }

    #[must_use]
    pub fn with_filter_param(mut self, param: impl Into<String>) -> Self {
        self.config.filter_param = param.into();
        self
    }

    #[must_use]
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.default_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_parser(mut self, parser: Arc<PurifierParser>) -> Self {
        self.parser = parser;
        self
    }

    #[must_use]
    pub fn with_customizer(mut self, customizer: impl FilterCustomizer + 'static) -> Self {
        self.customizer = Some(Arc::new(customizer));
        self
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Bind to one exchange; the binding is the context provider for every
    /// serialization pass of that response
    pub fn bind<'r, B>(&'r self, request: &'r Request<B>, status: StatusCode) -> RequestBinding<'r> {
        let info = RequestInfo {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
        };
        RequestBinding::new(self, info, status)
    }
}
