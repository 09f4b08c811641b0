//! Parsed nodes and expressions
//!
//! Nodes are immutable after the parser hands them out and are shared across
//! threads behind an `Arc<FilterExpression>`.

use std::fmt;

use super::name::{ANY_DEEP, BASE_VIEW, Name};

/// One parsed selector with its nested children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: Name,
    pub(crate) children: Vec<Node>,
    pub(crate) negated: bool,
    pub(crate) squiggly: bool,
    pub(crate) empty_nested: bool,
}

impl Node {
    /// A bare selector without nested block
    #[must_use]
    pub fn leaf(name: Name) -> Self {
        Self {
            name,
            children: Vec::new(),
            negated: false,
            squiggly: false,
            empty_nested: false,
        }
    }

    /// Synthetic node standing for "base view only"
    #[must_use]
    pub fn base_view() -> Self {
        Self {
            name: Name::View(BASE_VIEW.to_string()),
            children: Vec::new(),
            negated: false,
            squiggly: true,
            empty_nested: false,
        }
    }

    /// Synthetic deep wildcard added in front of all-negated levels
    #[must_use]
    pub(crate) fn implicit_deep() -> Self {
        Self::leaf(Name::AnyDeep)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the node was written with a nested `{...}` block
    #[inline]
    #[must_use]
    pub fn is_squiggly(&self) -> bool {
        self.squiggly
    }

    /// Whether the nested block was literally `{}`
    #[inline]
    #[must_use]
    pub fn is_empty_nested(&self) -> bool {
        self.empty_nested
    }

    #[inline]
    #[must_use]
    pub fn is_any_deep(&self) -> bool {
        matches!(self.name, Name::AnyDeep)
    }

    #[inline]
    #[must_use]
    pub fn is_any_shallow(&self) -> bool {
        matches!(self.name, Name::AnyShallow)
    }

    #[inline]
    #[must_use]
    pub fn match_strength(&self, field: &str) -> Option<usize> {
        self.name.match_strength(field)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("-")?;
        }
        write!(f, "{}", self.name)?;
        if self.squiggly && !matches!(self.name, Name::View(_)) {
            f.write_str("{")?;
            write_list(f, &self.children)?;
            f.write_str("}")?;
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

/// Parsed form of one filter string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    source: String,
    nodes: Vec<Node>,
}

impl FilterExpression {
    #[must_use]
    pub fn new(source: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            source: source.into(),
            nodes,
        }
    }

    /// The filter text this expression was parsed from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level nodes in declaration order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether the expression is the reserved "no filtering" literal
    #[inline]
    #[must_use]
    pub fn is_any_deep(&self) -> bool {
        self.source.trim() == ANY_DEEP
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.nodes)
    }
}
