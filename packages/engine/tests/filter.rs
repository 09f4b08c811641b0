mod common;

use std::sync::Arc;
use std::thread;

use common::{dotted, shop};
use purifier_engine::cache::{CacheSpec, MatchCache};
use purifier_engine::config::PurifierConfig;
use purifier_engine::context::{FilterContext, FilterHolder, ScopedContextProvider, SimpleContextProvider};
use purifier_engine::parser::PurifierParser;
use purifier_engine::path::{Path, RuntimeType};
use purifier_engine::PurifierFilter;

const PATHS: &[&str] = &[
    "Order:id",
    "Order:secret",
    "Order:customer",
    "Order:customer.Customer:id",
    "Order:customer.Customer:email",
    "Order:customer.Customer:address.Address:city",
    "Order:customer.Customer:address.Address:street",
    "Order:attributes.Map:color",
    "Order:audit.Audit:createdBy",
];

const FILTERS: &[&str] = &[
    "id",
    "*",
    "-secret",
    "customer{contact}",
    "customer.address",
    "customer{summary},attributes",
    "id,createdBy",
];

fn filter_with(spec: CacheSpec) -> PurifierFilter {
    let config = PurifierConfig::default().with_filter_path_cache(spec);
    PurifierFilter::new(shop(), &config)
}

fn context(filter: &str) -> FilterContext {
    FilterContext::new(filter, Some(RuntimeType::concrete("Order")), Arc::new(PurifierParser::default()))
}

fn decisions(filter: &PurifierFilter) -> Vec<bool> {
    FILTERS
        .iter()
        .flat_map(|text| {
            let context = context(text);
            PATHS
                .iter()
                .map(move |path| filter.include(&context, &dotted(path)).expect("include"))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn test_cold_and_warm_cache_agree() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let cold = decisions(&filter);
    let warm = decisions(&filter);
    assert_eq!(cold, warm);
    assert!(filter.cache().stats().hits > 0);
}

#[test]
fn test_disabled_cache_changes_no_outcome() {
    let cached = decisions(&filter_with(CacheSpec::bounded(1000)));
    let disabled = filter_with(CacheSpec::disabled());
    assert_eq!(decisions(&disabled), cached);
    assert_eq!(disabled.cache().stats().entries, 0);

    let tiny = decisions(&filter_with(CacheSpec::bounded(2)));
    assert_eq!(tiny, cached);
}

#[test]
fn test_map_paths_are_never_cached() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let context = context("attributes");
    let path = dotted("Order:attributes.Map:color");

    assert!(filter.include(&context, &path).expect("include"));
    assert!(filter.include(&context, &path).expect("include"));
    let stats = filter.cache().stats();
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.requests(), 0);
}

#[test]
fn test_absent_terminal_type_is_not_cached() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let path = Path::root("id", None);
    assert!(filter.include(&context("id"), &path).expect("include"));
    assert_eq!(filter.cache().stats().entries, 0);
}

#[test]
fn test_any_deep_short_circuits_before_parsing() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let context = context("**");
    assert!(filter.include(&context, &dotted("Order:secret")).expect("include"));
    assert!(!context.is_parsed());
    assert_eq!(filter.cache().stats().requests(), 0);
}

#[test]
fn test_empty_path_is_included() {
    let filter = filter_with(CacheSpec::bounded(1000));
    assert!(filter.include(&context("id"), &Path::new(Vec::new())).expect("include"));
}

#[test]
fn test_malformed_filter_is_an_error_every_time() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let context = context("customer{id");
    for path in ["Order:id", "Order:customer"] {
        let error = filter.include(&context, &dotted(path)).expect_err("malformed");
        assert!(error.is_syntax());
    }
}

#[test]
fn test_blank_filter_excludes_everything() {
    let filter = filter_with(CacheSpec::bounded(1000));
    assert!(!filter.include(&context(""), &dotted("Order:id")).expect("include"));
}

#[test]
fn test_provider_controls_enablement() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let parser = Arc::new(PurifierParser::default());
    let secret = dotted("Order:secret");

    let enabled = SimpleContextProvider::new(Some("id"), Arc::clone(&parser));
    assert!(!filter.include_with_provider(&enabled, &secret).expect("include"));

    let disabled = SimpleContextProvider::new(Some("**"), Arc::clone(&parser));
    assert!(filter.include_with_provider(&disabled, &secret).expect("include"));

    let absent = SimpleContextProvider::new(None, parser);
    assert!(filter.include_with_provider(&absent, &secret).expect("include"));
}

#[test]
fn test_scoped_provider_reads_thread_filter() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let provider = ScopedContextProvider::new(Arc::new(PurifierParser::default()));
    let secret = dotted("Order:secret");

    assert!(filter.include_with_provider(&provider, &secret).expect("include"));
    {
        let _guard = FilterHolder::enter("id");
        assert!(!filter.include_with_provider(&provider, &secret).expect("include"));
    }
    assert!(filter.include_with_provider(&provider, &secret).expect("include"));
}

#[tokio::test]
async fn test_scoped_provider_reads_task_filter() {
    let filter = filter_with(CacheSpec::bounded(1000));
    let provider = ScopedContextProvider::new(Arc::new(PurifierParser::default()));

    let excluded = FilterHolder::scope_task("id", async {
        tokio::task::yield_now().await;
        filter.include_with_provider(&provider, &dotted("Order:secret"))
    })
    .await
    .expect("include");
    assert!(!excluded);
}

#[test]
fn test_concurrent_passes_share_the_cache() {
    let cache = Arc::new(MatchCache::new(CacheSpec::bounded(64)));
    let expected = decisions(&filter_with(CacheSpec::disabled()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let filter = filter_with(CacheSpec::disabled()).with_cache(Arc::clone(&cache));
            thread::spawn(move || decisions(&filter))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker"), expected);
    }
    assert!(cache.stats().entries <= 64);
}
