//! Paths and their cache keys

use super::element::{PathElement, RuntimeType};

/// Cache identity of a path: dotted field names plus the terminal type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey {
    id: String,
    terminal_type: Option<RuntimeType>,
}

impl PathKey {
    fn derive(elements: &[PathElement]) -> Self {
        let mut id = String::new();
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                id.push('.');
            }
            id.push_str(element.name());
        }

        Self {
            id,
            terminal_type: elements.last().and_then(|e| e.runtime_type().cloned()),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn terminal_type(&self) -> Option<&RuntimeType> {
        self.terminal_type.as_ref()
    }
}

/// Root-to-current field sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    elements: Vec<PathElement>,
    key: PathKey,
}

impl Path {
    #[must_use]
    pub fn new(elements: Vec<PathElement>) -> Self {
        let key = PathKey::derive(&elements);
        Self { elements, key }
    }

    /// Single-element path for a top-level field
    #[must_use]
    pub fn root(name: impl Into<String>, runtime_type: Option<RuntimeType>) -> Self {
        Self::new(vec![PathElement::new(name, runtime_type)])
    }

    /// This path extended by one field
    #[must_use]
    pub fn child(&self, name: impl Into<String>, runtime_type: Option<RuntimeType>) -> Self {
        let mut elements = self.elements.clone();
        elements.push(PathElement::new(name, runtime_type));
        Self::new(elements)
    }

    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&PathElement> {
        self.elements.first()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last()
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &PathKey {
        &self.key
    }

    /// Maps are never cached: their key space is unbounded. Paths ending in
    /// a null parent have no type to key on.
    #[must_use]
    pub fn is_cacheable(&self) -> bool {
        self.key
            .terminal_type()
            .is_some_and(|ty| !ty.is_map())
    }
}
