//! Recursive descent parser producing the node list
//!
//! ```text
//! expr     := term (("," | "|") term)*
//! term     := "-"? group nested?
//! group    := selector ("|" selector)* | "(" selector ("|" selector)* ")"
//! selector := segment ("." segment)*
//! nested   := "{" expr? "}"
//! ```

use std::collections::VecDeque;

use super::tokenizer::tokenize;
use super::tokens::{Spanned, Token};
use crate::error::SyntaxError;
use crate::node::{ANY_DEEP, ANY_SHALLOW, FilterExpression, GlobPattern, Name, Node};

/// Deepest node nesting an expression may describe, counting both nested
/// blocks and dot path segments
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse a filter string into its expression. Pure; no caching.
pub fn parse_expression(input: &str) -> Result<FilterExpression, SyntaxError> {
    if input.trim().is_empty() {
        return Ok(FilterExpression::new(input, Vec::new()));
    }

    let mut parser = NodeParser::new(input, tokenize(input)?);
    let nodes = parser.parse_list()?;
    parser.expect_end()?;

    Ok(FilterExpression::new(input, nodes))
}

/// Dot path: leading segments plus the segment that carries the node flags
struct Selector {
    parents: Vec<Name>,
    last: Name,
}

/// Nested block following a group
struct Nested {
    children: Vec<Node>,
    empty: bool,
}

/// Parser state over the token queue
pub(crate) struct NodeParser<'a> {
    input: &'a str,
    tokens: VecDeque<Spanned>,
    depth: usize,
}

impl<'a> NodeParser<'a> {
    pub(crate) fn new(input: &'a str, tokens: VecDeque<Spanned>) -> Self {
        Self {
            input,
            tokens,
            depth: 0,
        }
    }

    /// `expr`: comma or pipe separated terms, normalized
    fn parse_list(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();

        loop {
            nodes.extend(self.parse_term()?);

            match self.peek() {
                Token::Comma | Token::Pipe => {
                    self.consume();
                }
                Token::RightBrace | Token::EOF => break,
                other => {
                    let message = format!("expected ',' but found {}", other.describe());
                    return Err(self.error_here(message));
                }
            }
        }

        Ok(normalize(nodes))
    }

    /// `term`: one group with optional negation and nested block
    fn parse_term(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let negated = if matches!(self.peek(), Token::Minus) {
            self.consume();
            true
        } else {
            false
        };

        let group = self.parse_group()?;
        let levels = group
            .iter()
            .map(|selector| selector.parents.len() + 1)
            .max()
            .unwrap_or(1);

        self.depth += levels;
        let nested = self.parse_nested();
        self.depth -= levels;
        let nested = nested?;

        Ok(group
            .into_iter()
            .map(|selector| build_chain(selector, negated, nested.as_ref()))
            .collect())
    }

    fn parse_group(&mut self) -> Result<Vec<Selector>, SyntaxError> {
        let parenthesized = matches!(self.peek(), Token::LeftParen);
        let open_offset = self.offset();
        if parenthesized {
            self.consume();
        }

        let mut group = vec![self.parse_selector()?];
        while matches!(self.peek(), Token::Pipe) {
            // an unparenthesized pipe followed by '-' is a sibling separator
            if !parenthesized && !self.peek_second().starts_selector() {
                break;
            }
            self.consume();
            group.push(self.parse_selector()?);
        }

        if parenthesized {
            match self.peek() {
                Token::RightParen => {
                    self.consume();
                }
                _ => {
                    return Err(SyntaxError::new(self.input, open_offset, "unbalanced '('"));
                }
            }
        }

        Ok(group)
    }

    /// `selector`: dot separated segments
    fn parse_selector(&mut self) -> Result<Selector, SyntaxError> {
        let mut parents = Vec::new();
        self.check_depth(0)?;
        let mut last = self.parse_segment()?;
        while matches!(self.peek(), Token::Dot) {
            self.consume();
            parents.push(last);
            self.check_depth(parents.len())?;
            last = self.parse_segment()?;
        }
        Ok(Selector { parents, last })
    }

    /// Reject a segment `extra` levels below the current block once it would
    /// exceed [`MAX_NESTING_DEPTH`]
    fn check_depth(&self, extra: usize) -> Result<(), SyntaxError> {
        if self.depth + extra >= MAX_NESTING_DEPTH {
            return Err(self.error_here("nesting too deep"));
        }
        Ok(())
    }

    fn parse_segment(&mut self) -> Result<Name, SyntaxError> {
        let offset = self.offset();
        match self.peek().clone() {
            Token::Identifier(raw) => {
                self.consume();
                self.classify(raw, offset)
            }
            Token::Quoted(literal) => {
                self.consume();
                if literal.is_empty() {
                    return Err(SyntaxError::new(self.input, offset, "empty quoted name"));
                }
                Ok(Name::Exact(literal))
            }
            other => Err(self.error_here(format!("empty selector before {}", other.describe()))),
        }
    }

    fn classify(&self, raw: String, offset: usize) -> Result<Name, SyntaxError> {
        if raw == ANY_DEEP {
            return Ok(Name::AnyDeep);
        }
        if raw == ANY_SHALLOW {
            return Ok(Name::AnyShallow);
        }
        if raw.contains('*') {
            return GlobPattern::new(raw)
                .map(Name::Glob)
                .map_err(|e| SyntaxError::new(self.input, offset, format!("invalid pattern: {e}")));
        }
        Ok(Name::Exact(raw))
    }

    fn parse_nested(&mut self) -> Result<Option<Nested>, SyntaxError> {
        if !matches!(self.peek(), Token::LeftBrace) {
            return Ok(None);
        }
        let open_offset = self.offset();
        self.consume();

        if matches!(self.peek(), Token::RightBrace) {
            self.consume();
            return Ok(Some(Nested {
                children: Vec::new(),
                empty: true,
            }));
        }

        let children = self.parse_list()?;
        match self.peek() {
            Token::RightBrace => {
                self.consume();
                Ok(Some(Nested {
                    children,
                    empty: false,
                }))
            }
            _ => Err(SyntaxError::new(self.input, open_offset, "unbalanced '{'")),
        }
    }

    fn expect_end(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Token::EOF => Ok(()),
            Token::RightBrace => Err(self.error_here("unbalanced '}'")),
            other => {
                let message = format!("unexpected {}", other.describe());
                Err(self.error_here(message))
            }
        }
    }

    #[inline]
    fn peek(&self) -> &Token {
        self.tokens.front().map_or(&Token::EOF, |spanned| &spanned.token)
    }

    #[inline]
    fn peek_second(&self) -> &Token {
        self.tokens.get(1).map_or(&Token::EOF, |spanned| &spanned.token)
    }

    #[inline]
    fn offset(&self) -> usize {
        self.tokens
            .front()
            .map_or_else(|| self.input.chars().count(), |spanned| spanned.offset)
    }

    #[inline]
    fn consume(&mut self) -> Option<Spanned> {
        self.tokens.pop_front()
    }

    fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.input, self.offset(), message)
    }
}

/// Turn a dot path into nested nodes; negation and the nested block attach
/// to the last segment
fn build_chain(selector: Selector, negated: bool, nested: Option<&Nested>) -> Node {
    let mut node = Node::leaf(selector.last);
    node.negated = negated;
    if let Some(nested) = nested {
        node.children = nested.children.clone();
        node.squiggly = true;
        node.empty_nested = nested.empty;
    }

    for name in selector.parents.into_iter().rev() {
        let mut parent = Node::leaf(name);
        parent.children = normalize(vec![node]);
        parent.squiggly = true;
        node = parent;
    }

    node
}

/// Merge identical non-negated siblings and give all-negated levels an
/// implicit deep wildcard
fn normalize(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());

    for node in nodes {
        let existing = merged
            .iter_mut()
            .find(|candidate| !candidate.negated && !node.negated && candidate.name == node.name);

        match existing {
            Some(target) => {
                let mut children = std::mem::take(&mut target.children);
                children.extend(node.children);
                target.children = normalize(children);
                target.empty_nested = target.empty_nested && node.empty_nested;
                target.squiggly |= node.squiggly;
            }
            None => merged.push(node),
        }
    }

    if !merged.is_empty() && merged.iter().all(Node::is_negated) {
        merged.insert(0, Node::implicit_deep());
    }

    merged
}
