#![allow(dead_code)]

use std::sync::Arc;

use purifier_engine::introspect::{BeanInfo, BeanInfoIntrospector, FieldInfo, TypeRef};
use purifier_engine::matcher::{MatchOptions, Matcher};
use purifier_engine::parser::parse_expression;
use purifier_engine::path::{Path, PathElement, RuntimeType};
use purifier_engine::PurifierResult;

/// Shop domain used across the matcher and filter tests
pub fn shop() -> Arc<BeanInfoIntrospector> {
    let introspector = BeanInfoIntrospector::default();

    introspector.register(
        BeanInfo::builder("Order")
            .plain("id")
            .plain("status")
            .plain("secret")
            .field(FieldInfo::new("customer").of_type(TypeRef::bean("Customer")))
            .field(FieldInfo::new("attributes").of_type(TypeRef::Map { values: None }))
            .field(FieldInfo::new("audit").unwrapped().of_type(TypeRef::bean("Audit")))
            .field(FieldInfo::new("notes").view("detail")),
    );
    introspector.register(
        BeanInfo::builder("Customer")
            .plain("id")
            .plain("notes")
            .field(FieldInfo::new("name").view("summary"))
            .field(FieldInfo::new("address").view("summary").of_type(TypeRef::bean("Address")))
            .field(FieldInfo::new("company").view("summary").of_type(TypeRef::bean("Company")))
            .field(FieldInfo::new("profile").view("summary").of_type(TypeRef::bean("Profile")))
            .field(FieldInfo::new("email").view("contact"))
            .field(FieldInfo::new("phone").view("contact"))
            .field(FieldInfo::new("password").hidden()),
    );
    introspector.register(
        BeanInfo::builder("Address")
            .plain("street")
            .plain("zip")
            .field(FieldInfo::new("city").view("summary")),
    );
    introspector.register(
        BeanInfo::builder("Profile")
            .plain("nickname")
            .field(FieldInfo::new("home").of_type(TypeRef::bean("Address"))),
    );
    introspector.register(BeanInfo::builder("Company").plain("name").plain("taxId"));
    introspector.register(BeanInfo::builder("Audit").plain("createdBy").plain("createdAt"));
    introspector.register(
        BeanInfo::builder("Car")
            .plain("ecoBoost")
            .plain("ecoBrake")
            .plain("engine"),
    );

    Arc::new(introspector)
}

/// Type name to runtime type; `Map` is a keyed container and `-` is absent
pub fn runtime_type(name: &str) -> Option<RuntimeType> {
    match name {
        "-" => None,
        "Map" => Some(RuntimeType::map("Map")),
        other => Some(RuntimeType::concrete(other)),
    }
}

/// Path from `(field, enclosing type)` pairs
pub fn path(elements: &[(&str, &str)]) -> Path {
    Path::new(
        elements
            .iter()
            .map(|(name, type_name)| PathElement::new(*name, runtime_type(type_name)))
            .collect(),
    )
}

/// Dotted path where every element names its enclosing type, e.g.
/// `Order:customer.Customer:email`
pub fn dotted(layout: &str) -> Path {
    let pairs: Vec<(&str, &str)> = layout
        .split('.')
        .map(|segment| {
            let (type_name, field) = segment.split_once(':').unwrap_or(("-", segment));
            (field, type_name)
        })
        .collect();
    path(&pairs)
}

pub fn try_matches(filter: &str, layout: &str, options: MatchOptions) -> PurifierResult<bool> {
    let introspector = shop();
    let expression = parse_expression(filter)?;
    Matcher::new(introspector.as_ref(), options).matches(&dotted(layout), &expression)
}

pub fn matches_with(filter: &str, layout: &str, options: MatchOptions) -> bool {
    try_matches(filter, layout, options).expect("matching should succeed")
}

pub fn matches(filter: &str, layout: &str) -> bool {
    matches_with(filter, layout, MatchOptions::default())
}

pub fn propagating() -> MatchOptions {
    MatchOptions {
        propagate_view_to_nested_filters: true,
        ..MatchOptions::default()
    }
}
