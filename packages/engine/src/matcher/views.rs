//! View resolution during matching

use std::sync::{Arc, LazyLock};

use hashbrown::HashSet;

use super::core::Matcher;
use crate::error::PurifierResult;
use crate::node::{BASE_VIEW, Node};
use crate::path::{PathElement, RuntimeType};

/// Synthetic level used below matched nodes that have no nested filter
pub static BASE_VIEW_NODES: LazyLock<Vec<Node>> = LazyLock::new(|| vec![Node::base_view()]);

impl Matcher<'_> {
    /// Whether `field` of `runtime_type` is a member of any view on the stack
    ///
    /// An empty stack means the base view. A label that names nothing on the
    /// type counts as the base view when base-field fallback is on.
    pub(super) fn in_view_stack(
        &self,
        runtime_type: &RuntimeType,
        field: &str,
        view_stack: &[&str],
    ) -> PurifierResult<bool> {
        if view_stack.is_empty() {
            return Ok(self.view_members(runtime_type, BASE_VIEW)?.contains(field));
        }

        for label in view_stack {
            let mut names = self.view_members(runtime_type, label)?;
            if names.is_empty() && self.options.implicitly_include_base_fields {
                names = self.view_members(runtime_type, BASE_VIEW)?;
            }
            if names.contains(field) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// First node whose label is a view containing the element's field
    ///
    /// For map values only a node labelled with the base view qualifies.
    pub(super) fn best_view_node<'n>(
        &self,
        element: &PathElement,
        nodes: &'n [Node],
    ) -> PurifierResult<Option<&'n Node>> {
        let Some(runtime_type) = element.runtime_type() else {
            return Ok(None);
        };
        let mut candidates = nodes.iter().filter(|node| node.name().is_view_candidate());

        if runtime_type.is_map() {
            return Ok(candidates.find(|node| node.name().label() == BASE_VIEW));
        }

        for node in candidates {
            if self
                .view_members(runtime_type, node.name().label())?
                .contains(element.name())
            {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }

    /// Whether the element is spliced into its parent object
    pub(super) fn is_unwrapped(&self, element: &PathElement) -> PurifierResult<bool> {
        match element.concrete_type() {
            Some(runtime_type) => Ok(self.introspector.is_unwrapped(runtime_type, element.name())?),
            None => Ok(false),
        }
    }

    fn view_members(
        &self,
        runtime_type: &RuntimeType,
        view: &str,
    ) -> PurifierResult<Arc<HashSet<String>>> {
        Ok(self.introspector.property_names_for_view(runtime_type, view)?)
    }
}
