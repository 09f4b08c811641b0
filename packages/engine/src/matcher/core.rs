//! The matching fold

use super::MatchOptions;
use super::views::BASE_VIEW_NODES;
use crate::error::PurifierResult;
use crate::introspect::Introspector;
use crate::node::{FilterExpression, Node};
use crate::path::Path;

/// Decides whether a path is selected by an expression
///
/// Pure apart from the collaborator lookups; cheap to build per call.
pub struct Matcher<'a> {
    pub(super) introspector: &'a dyn Introspector,
    pub(super) options: MatchOptions,
}

impl<'a> Matcher<'a> {
    #[must_use]
    pub fn new(introspector: &'a dyn Introspector, options: MatchOptions) -> Self {
        Self {
            introspector,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Include (`true`) or exclude (`false`) the last field of `path`
    ///
    /// # Errors
    ///
    /// Propagates introspection failures as `PurifierError::Introspection`.
    pub fn matches(&self, path: &Path, expression: &FilterExpression) -> PurifierResult<bool> {
        let mut nodes: &[Node] = expression.nodes();
        let mut view_node: Option<&Node> = None;
        let mut view_stack: Vec<&str> = Vec::new();
        let last = path.len().saturating_sub(1);

        for (i, element) in path.elements().iter().enumerate() {
            if let Some(view) = view_node
                && !view.is_squiggly()
            {
                // maps and null values pass through a view untouched
                if let Some(runtime_type) = element.concrete_type()
                    && !self.in_view_stack(runtime_type, element.name(), &view_stack)?
                {
                    return Ok(false);
                }
                continue;
            }

            if nodes.is_empty() {
                if self.is_unwrapped(element)? {
                    continue;
                }
                return Ok(false);
            }

            let matched = match best_simple_node(element.name(), nodes) {
                Some(node) => node,
                None => match self.best_view_node(element, nodes)? {
                    Some(node) => {
                        view_node = Some(node);
                        let label = node.name().label();
                        if self.options.propagate_view_to_nested_filters && !view_stack.contains(&label) {
                            view_stack.push(label);
                        }
                        node
                    }
                    None if self.is_unwrapped(element)? => continue,
                    None => return Ok(false),
                },
            };

            if matched.is_negated() {
                return Ok(false);
            }
            if matched.is_any_deep() {
                return Ok(true);
            }
            if matched.is_any_shallow() {
                view_node = Some(matched);
            }

            nodes = matched.children();
            if i < last
                && nodes.is_empty()
                && !matched.is_empty_nested()
                && self.options.implicitly_include_base_fields
            {
                nodes = BASE_VIEW_NODES.as_slice();
            }
        }

        Ok(true)
    }
}

/// Strongest name match; ties go to the later node unless that would
/// displace a negation
fn best_simple_node<'n>(field: &str, nodes: &'n [Node]) -> Option<&'n Node> {
    let mut best: Option<(&Node, usize)> = None;
    for node in nodes {
        let Some(strength) = node.match_strength(field) else {
            continue;
        };
        let replaces = best.is_none_or(|(current, current_strength)| {
            strength > current_strength
                || (strength == current_strength && (node.is_negated() || !current.is_negated()))
        });
        if replaces {
            best = Some((node, strength));
        }
    }
    best.map(|(node, _)| node)
}
