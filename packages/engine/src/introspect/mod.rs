//! Type introspection collaborators
//!
//! The matcher asks two questions about runtime types: which fields belong to
//! a view, and whether a field is unwrapped into its parent. Both are answered
//! through the traits below; [`BeanInfoIntrospector`] is a registry backed
//! implementation.

mod bean_info;
mod introspector;

use std::sync::Arc;

use hashbrown::HashSet;

pub use bean_info::{BeanInfo, BeanInfoBuilder, FieldInfo, TypeRef};
pub use introspector::BeanInfoIntrospector;

use crate::error::IntrospectionError;
use crate::path::RuntimeType;

/// Resolves `(runtime type, view label)` to the member field names
pub trait ViewResolver: Send + Sync {
    /// Names of the fields of `runtime_type` in `view`; empty when the view
    /// is unknown for that type
    ///
    /// # Errors
    ///
    /// Returns an `IntrospectionError` when the type cannot be introspected.
    fn property_names_for_view(
        &self,
        runtime_type: &RuntimeType,
        view: &str,
    ) -> Result<Arc<HashSet<String>>, IntrospectionError>;
}

/// Reports fields whose members are spliced into the parent object
pub trait UnwrappedFields: Send + Sync {
    /// # Errors
    ///
    /// Returns an `IntrospectionError` when the type cannot be introspected.
    fn is_unwrapped(&self, runtime_type: &RuntimeType, field: &str) -> Result<bool, IntrospectionError>;
}

/// Both collaborators in one object
pub trait Introspector: ViewResolver + UnwrappedFields {}

impl<T: ViewResolver + UnwrappedFields> Introspector for T {}
