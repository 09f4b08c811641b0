use std::sync::Arc;

use purifier::prelude::*;
use serde_json::{Value, json};

fn shop() -> Arc<BeanInfoIntrospector> {
    let introspector = BeanInfoIntrospector::default();
    introspector.register(
        BeanInfo::builder("Order")
            .plain("id")
            .plain("status")
            .field(FieldInfo::new("token").hidden())
            .field(FieldInfo::new("customer").of_type(TypeRef::bean("Customer")))
            .field(FieldInfo::new("items").of_type(TypeRef::bean("LineItem")))
            .field(FieldInfo::new("attributes").of_type(TypeRef::Map { values: None }))
            .field(FieldInfo::new("audit").unwrapped().of_type(TypeRef::bean("Audit")))
            .field(FieldInfo::new("notes").view("detail")),
    );
    introspector.register(
        BeanInfo::builder("Customer")
            .plain("id")
            .field(FieldInfo::new("name").view("summary"))
            .field(FieldInfo::new("email").view("contact"))
            .plain("notes"),
    );
    introspector.register(
        BeanInfo::builder("LineItem")
            .plain("sku")
            .plain("qty")
            .field(FieldInfo::new("price").view("pricing")),
    );
    introspector.register(BeanInfo::builder("Audit").plain("createdBy").plain("createdAt"));
    Arc::new(introspector)
}

fn order() -> Value {
    json!({
        "id": 1,
        "status": "open",
        "token": "t0k",
        "customer": {"id": 7, "name": "Ann", "email": "ann@example.com", "notes": "vip"},
        "items": [
            {"sku": "A", "qty": 1, "price": 9},
            {"sku": "B", "qty": 2, "price": 5}
        ],
        "attributes": {"color": "red", "size": "L"},
        "audit": {"createdBy": "ops", "createdAt": "2024-01-01"},
        "notes": "n",
        "extra": "x"
    })
}

fn order_type() -> RuntimeType {
    RuntimeType::concrete("Order")
}

fn context(filter: &str) -> FilterContext {
    FilterContext::new(filter, Some(order_type()), Arc::new(PurifierParser::default()))
}

fn purify(filter: &str) -> Value {
    JsonPurifier::new(shop(), &PurifierConfig::default())
        .purify(&order(), &order_type(), &context(filter))
        .expect("purify")
}

#[test]
fn test_field_list_with_nested_filter() {
    assert_eq!(
        purify("id,customer{name}"),
        json!({"id": 1, "customer": {"name": "Ann"}})
    );
}

#[test]
fn test_shallow_wildcard_writes_base_views_below() {
    assert_eq!(
        purify("*"),
        json!({
            "id": 1,
            "status": "open",
            "customer": {"id": 7, "notes": "vip"},
            "items": [{"sku": "A", "qty": 1}, {"sku": "B", "qty": 2}],
            "attributes": {"color": "red", "size": "L"},
            "createdBy": "ops",
            "createdAt": "2024-01-01",
            "notes": "n",
            "extra": "x"
        })
    );
}

#[test]
fn test_arrays_add_no_path_element() {
    assert_eq!(
        purify("items{sku,pricing}"),
        json!({"items": [{"sku": "A", "price": 9}, {"sku": "B", "price": 5}]})
    );
}

#[test]
fn test_unwrapped_members_are_spliced() {
    assert_eq!(purify("id,createdBy"), json!({"id": 1, "createdBy": "ops"}));
}

#[test]
fn test_unwrapped_flag_on_untyped_field_keeps_it_nested() {
    let introspector = Arc::new(BeanInfoIntrospector::default());
    introspector.register(
        BeanInfo::builder("Ticket")
            .plain("id")
            .field(FieldInfo::new("meta").unwrapped()),
    );
    let host = JsonPurifier::new(introspector, &PurifierConfig::default());
    let ticket = json!({"id": 1, "meta": {"source": "mail"}});
    let ticket_type = RuntimeType::concrete("Ticket");
    let run = |filter: &str| {
        let context = FilterContext::new(filter, Some(ticket_type.clone()), Arc::new(PurifierParser::default()));
        host.purify(&ticket, &ticket_type, &context).expect("purify")
    };

    assert_eq!(run("id"), json!({"id": 1}));
    assert_eq!(run("meta"), json!({"meta": {"source": "mail"}}));
}

#[test]
fn test_map_entries_are_filtered_by_key() {
    assert_eq!(purify("attributes{color}"), json!({"attributes": {"color": "red"}}));
}

#[test]
fn test_negation_keeps_everything_else() {
    let purified = purify("-status");
    assert!(purified.get("status").is_none());
    assert!(purified.get("token").is_none());
    assert_eq!(purified["customer"]["email"], "ann@example.com");
    assert_eq!(purified["items"][1]["price"], 5);
}

#[test]
fn test_placeholder_replaces_excluded_fields() {
    let purified = JsonPurifier::new(shop(), &PurifierConfig::default())
        .with_placeholder(json!("***"))
        .purify(&order(), &order_type(), &context("id,customer{name}"))
        .expect("purify");

    assert_eq!(purified["id"], 1);
    assert_eq!(purified["status"], "***");
    assert_eq!(purified["customer"]["name"], "Ann");
    assert_eq!(purified["customer"]["email"], "***");
    assert_eq!(purified["items"], "***");
    assert!(purified.get("token").is_none());
}

#[test]
fn test_root_arrays() {
    let purified = JsonPurifier::new(shop(), &PurifierConfig::default())
        .purify(&json!([order(), order()]), &order_type(), &context("id"))
        .expect("purify");
    assert_eq!(purified, json!([{"id": 1}, {"id": 1}]));
}

#[test]
fn test_disabled_provider_copies_value() {
    let host = JsonPurifier::new(shop(), &PurifierConfig::default());
    let provider = SimpleContextProvider::new(Some("**"), Arc::new(PurifierParser::default()));
    let purified = host
        .purify_with_provider(&order(), &order_type(), &provider)
        .expect("purify");
    assert_eq!(purified, order());
}

#[test]
fn test_unregistered_type_is_an_error() {
    let host = JsonPurifier::new(shop(), &PurifierConfig::default());
    let error = host
        .purify(&json!({"a": 1}), &RuntimeType::concrete("Ghost"), &context("a"))
        .expect_err("unregistered");
    assert!(matches!(error, PurifierError::Introspection(_)));
}

#[test]
fn test_malformed_filter_is_an_error() {
    let host = JsonPurifier::new(shop(), &PurifierConfig::default());
    let error = host
        .purify(&order(), &order_type(), &context("customer{"))
        .expect_err("malformed");
    assert!(error.is_syntax());
}
