//! Registered type descriptions

use std::sync::Arc;

use hashbrown::{HashMap, HashSet};

use crate::node::{BASE_VIEW, FULL_VIEW};

/// Declared type of a field's value, used by hosts to type nested objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Nested registered type
    Bean(String),
    /// Keyed container, optionally with registered value type
    Map { values: Option<String> },
    /// Scalar or free-form value
    Untyped,
}

impl TypeRef {
    #[must_use]
    pub fn bean(name: impl Into<String>) -> Self {
        TypeRef::Bean(name.into())
    }

    #[must_use]
    pub fn map_of(values: impl Into<String>) -> Self {
        TypeRef::Map {
            values: Some(values.into()),
        }
    }
}

/// One declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    name: String,
    views: Vec<String>,
    hidden: bool,
    unwrapped: bool,
    value_type: TypeRef,
}

impl FieldInfo {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            views: Vec::new(),
            hidden: false,
            unwrapped: false,
            value_type: TypeRef::Untyped,
        }
    }

    /// Add the field to a named view
    #[must_use]
    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.views.push(view.into());
        self
    }

    /// Never serialized and never part of a view
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Members of the value are written into the parent. Only honoured for
    /// fields typed as a registered bean.
    #[must_use]
    pub fn unwrapped(mut self) -> Self {
        self.unwrapped = true;
        self
    }

    #[must_use]
    pub fn of_type(mut self, value_type: TypeRef) -> Self {
        self.value_type = value_type;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn views(&self) -> &[String] {
        &self.views
    }

    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    #[must_use]
    pub fn is_unwrapped(&self) -> bool {
        self.unwrapped
    }

    #[inline]
    #[must_use]
    pub fn value_type(&self) -> &TypeRef {
        &self.value_type
    }
}

/// Introspected description of a concrete type
#[derive(Debug, Clone)]
pub struct BeanInfo {
    type_name: String,
    fields: Vec<FieldInfo>,
    views: HashMap<String, Arc<HashSet<String>>>,
    unwrapped: HashSet<String>,
}

impl BeanInfo {
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> BeanInfoBuilder {
        BeanInfoBuilder {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Serializable fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields.iter().filter(|field| !field.is_hidden())
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields().find(|field| field.name() == name)
    }

    /// Whether `name` is declared at all, hidden fields included
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    /// Field names of `view`, empty for an unknown view
    #[must_use]
    pub fn property_names_for_view(&self, view: &str) -> Arc<HashSet<String>> {
        self.views.get(view).cloned().unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn is_unwrapped(&self, field: &str) -> bool {
        self.unwrapped.contains(field)
    }

    /// Labels of every view with at least one member
    pub fn view_labels(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }
}

/// Builder collecting declared fields
#[derive(Debug, Clone)]
pub struct BeanInfoBuilder {
    type_name: String,
    fields: Vec<FieldInfo>,
}

impl BeanInfoBuilder {
    #[must_use]
    pub fn field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    /// Shorthand for a plain base-view field
    #[must_use]
    pub fn plain(self, name: impl Into<String>) -> Self {
        self.field(FieldInfo::new(name))
    }

    /// Compute the view table. Fields without a view join the base view when
    /// `non_annotated_in_base` is set.
    #[must_use]
    pub fn build(self, non_annotated_in_base: bool) -> BeanInfo {
        let mut views: HashMap<String, HashSet<String>> = HashMap::new();
        let mut unwrapped = HashSet::new();

        for field in self.fields.iter().filter(|field| !field.is_hidden()) {
            let name = field.name().to_string();
            views.entry(FULL_VIEW.to_string()).or_default().insert(name.clone());

            if field.views().is_empty() && non_annotated_in_base {
                views.entry(BASE_VIEW.to_string()).or_default().insert(name.clone());
            }
            for view in field.views() {
                views.entry(view.clone()).or_default().insert(name.clone());
            }
            if field.is_unwrapped() {
                if matches!(field.value_type(), TypeRef::Bean(_)) {
                    unwrapped.insert(name);
                } else {
                    log::warn!(
                        "Ignoring unwrapped flag on {}.{}: only bean typed fields can be unwrapped",
                        self.type_name,
                        name
                    );
                }
            }
        }

        BeanInfo {
            type_name: self.type_name,
            fields: self.fields,
            views: views
                .into_iter()
                .map(|(view, names)| (view, Arc::new(names)))
                .collect(),
            unwrapped,
        }
    }
}
