//! Registry backed introspector

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use hashbrown::HashSet;

use super::bean_info::{BeanInfo, BeanInfoBuilder};
use super::{UnwrappedFields, ViewResolver};
use crate::config::PurifierConfig;
use crate::error::IntrospectionError;
use crate::path::RuntimeType;

static GLOBAL_INTROSPECTOR: LazyLock<Arc<BeanInfoIntrospector>> = LazyLock::new(|| {
    Arc::new(BeanInfoIntrospector::new(
        PurifierConfig::global().add_non_annotated_fields_to_base_view,
    ))
});

/// Concurrent registry of [`BeanInfo`] keyed by type name
#[derive(Debug)]
pub struct BeanInfoIntrospector {
    types: DashMap<String, Arc<BeanInfo>>,
    non_annotated_in_base: bool,
    lookups: AtomicU64,
    unknown: AtomicU64,
}

impl Default for BeanInfoIntrospector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BeanInfoIntrospector {
    #[must_use]
    pub fn new(non_annotated_in_base: bool) -> Self {
        Self {
            types: DashMap::new(),
            non_annotated_in_base,
            lookups: AtomicU64::new(0),
            unknown: AtomicU64::new(0),
        }
    }

    /// Process-wide registry built from the global configuration
    #[must_use]
    pub fn global() -> Arc<BeanInfoIntrospector> {
        Arc::clone(&GLOBAL_INTROSPECTOR)
    }

    /// Register (or replace) a type description
    pub fn register(&self, builder: BeanInfoBuilder) -> Arc<BeanInfo> {
        let info = Arc::new(builder.build(self.non_annotated_in_base));
        log::debug!("Registered type {} with {} fields", info.type_name(), info.fields().count());
        self.types
            .insert(info.type_name().to_string(), Arc::clone(&info));
        info
    }

    /// Description of a concrete type
    ///
    /// # Errors
    ///
    /// Returns `IntrospectionError::UnknownType` when the type was never
    /// registered.
    pub fn introspect(&self, runtime_type: &RuntimeType) -> Result<Arc<BeanInfo>, IntrospectionError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        match self.types.get(runtime_type.name()) {
            Some(entry) => Ok(Arc::clone(entry.value())),
            None => {
                self.unknown.fetch_add(1, Ordering::Relaxed);
                Err(IntrospectionError::unknown_type(runtime_type.name()))
            }
        }
    }

    /// Description by bare type name, if registered
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<Arc<BeanInfo>> {
        self.types.get(type_name).map(|entry| Arc::clone(entry.value()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// (lookups, failed lookups)
    #[must_use]
    pub fn lookup_counts(&self) -> (u64, u64) {
        (
            self.lookups.load(Ordering::Relaxed),
            self.unknown.load(Ordering::Relaxed),
        )
    }
}

impl ViewResolver for BeanInfoIntrospector {
    fn property_names_for_view(
        &self,
        runtime_type: &RuntimeType,
        view: &str,
    ) -> Result<Arc<HashSet<String>>, IntrospectionError> {
        if runtime_type.is_map() {
            return Ok(Arc::default());
        }
        Ok(self.introspect(runtime_type)?.property_names_for_view(view))
    }
}

impl UnwrappedFields for BeanInfoIntrospector {
    fn is_unwrapped(&self, runtime_type: &RuntimeType, field: &str) -> Result<bool, IntrospectionError> {
        if runtime_type.is_map() {
            return Ok(false);
        }
        Ok(self.introspect(runtime_type)?.is_unwrapped(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::FieldInfo;
    use crate::node::BASE_VIEW;

    #[test]
    fn resolves_registered_views() {
        let introspector = BeanInfoIntrospector::default();
        introspector.register(
            BeanInfo::builder("User")
                .plain("id")
                .field(FieldInfo::new("email").view("contact")),
        );

        let user = RuntimeType::concrete("User");
        let base = introspector
            .property_names_for_view(&user, BASE_VIEW)
            .expect("registered");
        assert!(base.contains("id"));
        assert!(!base.contains("email"));
        assert_eq!(introspector.lookup_counts(), (1, 0));
    }

    #[test]
    fn unknown_types_fail() {
        let introspector = BeanInfoIntrospector::default();
        let error = introspector
            .is_unwrapped(&RuntimeType::concrete("Ghost"), "id")
            .expect_err("not registered");
        assert_eq!(error, IntrospectionError::UnknownType("Ghost".into()));
        assert_eq!(introspector.lookup_counts(), (1, 1));
    }

    #[test]
    fn maps_have_no_members() {
        let introspector = BeanInfoIntrospector::default();
        let map = RuntimeType::map("Map");
        assert!(introspector
            .property_names_for_view(&map, BASE_VIEW)
            .expect("maps never fail")
            .is_empty());
        assert!(!introspector.is_unwrapped(&map, "key").expect("maps never fail"));
    }
}
