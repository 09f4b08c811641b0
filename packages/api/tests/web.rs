use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use http::{Request, StatusCode};
use purifier::prelude::*;
use serde_json::json;

fn request(uri: &str) -> Request<()> {
    Request::builder().uri(uri).body(()).expect("valid request")
}

fn provider() -> RequestContextProvider {
    RequestContextProvider::default().with_parser(Arc::new(PurifierParser::default()))
}

#[test]
fn test_filter_comes_from_query_parameter() {
    let provider = provider();
    let request = request("/orders?page=2&fields=id,status");
    let binding = provider.bind(&request, StatusCode::OK);

    assert!(binding.is_filtering_enabled());
    assert_eq!(binding.requested_filter(), Some("id,status"));
    assert_eq!(binding.filter_for(None).as_deref(), Some("id,status"));
}

#[test]
fn test_percent_encoded_filters_are_decoded() {
    let provider = provider();
    let request = request("/orders?fields=customer%7Bname%7D");
    let binding = provider.bind(&request, StatusCode::OK);
    assert_eq!(binding.requested_filter(), Some("customer{name}"));
}

#[test]
fn test_only_successful_responses_are_filtered() {
    let provider = provider();
    let request = request("/orders?fields=id");
    assert!(provider.bind(&request, StatusCode::CREATED).is_filtering_enabled());
    assert!(!provider.bind(&request, StatusCode::NOT_FOUND).is_filtering_enabled());
    assert!(!provider.bind(&request, StatusCode::MOVED_PERMANENTLY).is_filtering_enabled());
}

#[test]
fn test_default_filter_handling() {
    let bare = request("/orders");

    let no_default = provider();
    assert!(!no_default.bind(&bare, StatusCode::OK).is_filtering_enabled());

    let with_default = provider().with_default_filter("id");
    let binding = with_default.bind(&bare, StatusCode::OK);
    assert!(binding.is_filtering_enabled());
    assert_eq!(binding.filter_for(None).as_deref(), Some("id"));

    let any_deep_default = provider().with_default_filter("**");
    assert!(!any_deep_default.bind(&bare, StatusCode::OK).is_filtering_enabled());
}

#[test]
fn test_requested_any_deep_disables_filtering() {
    let provider = provider().with_default_filter("id");
    let request = request("/orders?fields=**");
    assert!(!provider.bind(&request, StatusCode::OK).is_filtering_enabled());
}

#[test]
fn test_custom_parameter_name() {
    let provider = provider().with_filter_param("select");
    let request = request("/orders?fields=id&select=status");
    assert_eq!(provider.bind(&request, StatusCode::OK).requested_filter(), Some("status"));
}

struct CountingCustomizer {
    calls: Arc<AtomicUsize>,
}

impl FilterCustomizer for CountingCustomizer {
    fn customize(
        &self,
        filter: Option<&str>,
        _request: &RequestInfo<'_>,
        root_type: Option<&RuntimeType>,
    ) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match root_type.map(RuntimeType::name) {
            Some("Customer") => Some("id".to_string()),
            _ => filter.map(str::to_string),
        }
    }
}

#[test]
fn test_customized_filter_is_memoized_per_root_type() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = provider().with_customizer(CountingCustomizer {
        calls: Arc::clone(&calls),
    });
    let request = request("/orders?fields=status");
    let binding = provider.bind(&request, StatusCode::OK);
    let order = RuntimeType::concrete("Order");
    let customer = RuntimeType::concrete("Customer");

    assert_eq!(binding.filter_for(Some(&order)).as_deref(), Some("status"));
    assert_eq!(binding.filter_for(Some(&order)).as_deref(), Some("status"));
    assert_eq!(binding.filter_for(Some(&customer)).as_deref(), Some("id"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_request_config_deserializes_with_defaults() {
    let config: RequestConfig = serde_json::from_str(r#"{"default_filter": "id"}"#).expect("valid config");
    assert_eq!(config.filter_param, "fields");
    assert_eq!(config.default_filter.as_deref(), Some("id"));
}

#[test]
fn test_request_binding_drives_json_host() {
    let introspector = Arc::new(BeanInfoIntrospector::default());
    introspector.register(BeanInfo::builder("Doc").plain("id").plain("title").plain("body"));
    let host = JsonPurifier::new(Arc::clone(&introspector), &PurifierConfig::default());
    let doc = json!({"id": 3, "title": "t", "body": "b"});
    let doc_type = RuntimeType::concrete("Doc");

    let provider = provider();
    let request = request("/docs/3?fields=-body");
    let ok = provider.bind(&request, StatusCode::OK);
    assert_eq!(
        host.purify_with_provider(&doc, &doc_type, &ok).expect("purify"),
        json!({"id": 3, "title": "t"})
    );

    let failed = provider.bind(&request, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(host.purify_with_provider(&doc, &doc_type, &failed).expect("purify"), doc);
}

#[test]
fn test_runaway_nesting_in_query_is_a_syntax_error() {
    let introspector = Arc::new(BeanInfoIntrospector::default());
    introspector.register(BeanInfo::builder("Doc").plain("id").plain("title"));
    let host = JsonPurifier::new(Arc::clone(&introspector), &PurifierConfig::default());
    let doc = json!({"id": 3, "title": "t"});

    let provider = provider();
    let request = request(&format!("/docs/3?fields={}id", "a%7B".repeat(5_000)));
    let binding = provider.bind(&request, StatusCode::OK);

    let error = host
        .purify_with_provider(&doc, &RuntimeType::concrete("Doc"), &binding)
        .expect_err("rejected filter");
    assert!(error.is_syntax());
}
