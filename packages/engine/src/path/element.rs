//! Path elements and runtime types

use std::fmt;
use std::sync::Arc;

/// Shape of a runtime type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKind {
    /// Declared type with a fixed set of fields
    Concrete,
    /// Dynamic keyed container with an unbounded key space
    Map,
}

/// Runtime type of a value during serialization
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuntimeType {
    name: Arc<str>,
    kind: TypeKind,
}

impl RuntimeType {
    #[must_use]
    pub fn concrete(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            kind: TypeKind::Concrete,
        }
    }

    #[must_use]
    pub fn map(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            kind: TypeKind::Map,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_map(&self) -> bool {
        self.kind == TypeKind::Map
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One visited field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathElement {
    name: String,
    runtime_type: Option<RuntimeType>,
}

impl PathElement {
    /// `runtime_type` is the type of the value declaring the field, `None`
    /// when that value is null
    #[must_use]
    pub fn new(name: impl Into<String>, runtime_type: Option<RuntimeType>) -> Self {
        Self {
            name: name.into(),
            runtime_type,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn runtime_type(&self) -> Option<&RuntimeType> {
        self.runtime_type.as_ref()
    }

    /// The runtime type when it is a declared (non-map) type
    #[inline]
    #[must_use]
    pub fn concrete_type(&self) -> Option<&RuntimeType> {
        self.runtime_type.as_ref().filter(|ty| !ty.is_map())
    }
}
