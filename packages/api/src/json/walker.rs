//! JSON walking host

use std::sync::Arc;

use purifier_engine::config::PurifierConfig;
use purifier_engine::context::{ContextProvider, FilterContext};
use purifier_engine::error::PurifierResult;
use purifier_engine::introspect::{BeanInfoIntrospector, Introspector, TypeRef};
use purifier_engine::path::{Path, RuntimeType};
use purifier_engine::PurifierFilter;
use serde_json::{Map, Value};

const MAP_TYPE: &str = "Map";

/// How an excluded field is written
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Excluded {
    /// Leave the field out
    #[default]
    Omit,
    /// Write the field with this value instead
    Placeholder(Value),
}

/// Filters `serde_json::Value` trees against registered type descriptions
#[derive(Debug, Clone)]
pub struct JsonPurifier {
    introspector: Arc<BeanInfoIntrospector>,
    filter: PurifierFilter,
    excluded: Excluded,
}

impl JsonPurifier {
    /// Host with its own filter and match cache sized by `config`
    pub fn new(introspector: Arc<BeanInfoIntrospector>, config: &PurifierConfig) -> Self {
        let shared: Arc<dyn Introspector> = introspector.clone();
        Self {
            filter: PurifierFilter::new(shared, config),
            introspector,
            excluded: Excluded::Omit,
        }
    }

    /// Host over the process-wide introspector and filter
    pub fn global() -> Self {
        Self {
            introspector: BeanInfoIntrospector::global(),
            filter: PurifierFilter::global(),
            excluded: Excluded::Omit,
        }
    }

    /// Write excluded fields as `placeholder` instead of omitting them
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: Value) -> Self {
        self.excluded = Excluded::Placeholder(placeholder);
        self
    }

    pub fn filter(&self) -> &PurifierFilter {
        &self.filter
    }

    pub fn introspector(&self) -> &Arc<BeanInfoIntrospector> {
        &self.introspector
    }

    /// Filtered copy of `value`, a `root` typed value
    ///
    /// # Errors
    ///
    /// Returns the filter's syntax and introspection errors, including an
    /// unknown type for objects of unregistered types.
    pub fn purify(&self, value: &Value, root: &RuntimeType, context: &FilterContext) -> PurifierResult<Value> {
        let value_type = if root.is_map() {
            TypeRef::Map { values: None }
        } else {
            TypeRef::bean(root.name())
        };

        let pass = Pass {
            host: self,
            context,
        };
        pass.write_value(value, &value_type, &Path::new(Vec::new()))
    }

    /// [`purify`](Self::purify) with the context chosen by `provider`;
    /// the value is copied unchanged while filtering is disabled
    ///
    /// # Errors
    ///
    /// As [`purify`](Self::purify).
    pub fn purify_with_provider(
        &self,
        value: &Value,
        root: &RuntimeType,
        provider: &dyn ContextProvider,
    ) -> PurifierResult<Value> {
        if !provider.is_filtering_enabled() {
            return Ok(value.clone());
        }
        let context = provider.context(Some(root));
        log::debug!("Purifying {} with filter '{}'", root, context.filter());
        self.purify(value, root, &context)
    }
}

/// One serialization pass
struct Pass<'a> {
    host: &'a JsonPurifier,
    context: &'a FilterContext,
}

impl Pass<'_> {
    /// Arrays add no path element; scalars are copied
    fn write_value(&self, value: &Value, value_type: &TypeRef, parent: &Path) -> PurifierResult<Value> {
        match (value, value_type) {
            (Value::Array(items), _) => items
                .iter()
                .map(|item| self.write_value(item, value_type, parent))
                .collect::<PurifierResult<Vec<_>>>()
                .map(Value::Array),
            (Value::Object(members), TypeRef::Bean(type_name)) => {
                let mut out = Map::new();
                self.write_bean(members, &RuntimeType::concrete(type_name), parent, &mut out)?;
                Ok(Value::Object(out))
            }
            (Value::Object(entries), TypeRef::Map { values }) => {
                let values = values.as_deref().map_or(TypeRef::Untyped, TypeRef::bean);
                self.write_map(entries, &values, parent)
            }
            (Value::Object(entries), TypeRef::Untyped) => self.write_map(entries, &TypeRef::Untyped, parent),
            (scalar, _) => Ok(scalar.clone()),
        }
    }

    fn write_bean(
        &self,
        members: &Map<String, Value>,
        bean_type: &RuntimeType,
        parent: &Path,
        out: &mut Map<String, Value>,
    ) -> PurifierResult<()> {
        let info = self.host.introspector.introspect(bean_type)?;

        for field in info.fields() {
            let Some(value) = members.get(field.name()) else {
                continue;
            };
            let path = parent.child(field.name(), Some(bean_type.clone()));

            // members of an unwrapped object land in this object
            if field.is_unwrapped()
                && let (Value::Object(inner), TypeRef::Bean(inner_type)) = (value, field.value_type())
            {
                self.write_bean(inner, &RuntimeType::concrete(inner_type), &path, out)?;
                continue;
            }

            self.write_field(field.name(), value, field.value_type(), &path, out)?;
        }

        // undeclared members are offered as untyped fields after the declared ones
        for (name, value) in members {
            if !info.declares(name) {
                let path = parent.child(name.as_str(), Some(bean_type.clone()));
                self.write_field(name, value, &TypeRef::Untyped, &path, out)?;
            }
        }
        Ok(())
    }

    fn write_map(&self, entries: &Map<String, Value>, values: &TypeRef, parent: &Path) -> PurifierResult<Value> {
        let map_type = RuntimeType::map(MAP_TYPE);
        let mut out = Map::new();
        for (key, value) in entries {
            let path = parent.child(key.as_str(), Some(map_type.clone()));
            self.write_field(key, value, values, &path, &mut out)?;
        }
        Ok(Value::Object(out))
    }

    fn write_field(
        &self,
        name: &str,
        value: &Value,
        value_type: &TypeRef,
        path: &Path,
        out: &mut Map<String, Value>,
    ) -> PurifierResult<()> {
        if self.host.filter.include(self.context, path)? {
            out.insert(name.to_string(), self.write_value(value, value_type, path)?);
        } else if let Excluded::Placeholder(placeholder) = &self.host.excluded {
            out.insert(name.to_string(), placeholder.clone());
        }
        Ok(())
    }
}
