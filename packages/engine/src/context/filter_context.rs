//! Lazily parsed filter bound to one pass

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::SyntaxError;
use crate::node::{ANY_DEEP, FilterExpression};
use crate::parser::PurifierParser;
use crate::path::RuntimeType;

/// One filter string and its expression, parsed at most once
///
/// The parse outcome is memoized including a syntax error, so a broken
/// filter fails the same way for every field of the pass.
#[derive(Debug)]
pub struct FilterContext {
    filter: Arc<str>,
    root_type: Option<RuntimeType>,
    parser: Arc<PurifierParser>,
    expression: OnceCell<Result<Arc<FilterExpression>, SyntaxError>>,
}

impl FilterContext {
    pub fn new(
        filter: impl Into<Arc<str>>,
        root_type: Option<RuntimeType>,
        parser: Arc<PurifierParser>,
    ) -> Self {
        Self {
            filter: filter.into(),
            root_type,
            parser,
            expression: OnceCell::new(),
        }
    }

    #[inline]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Type of the value serialization started from
    #[inline]
    pub fn root_type(&self) -> Option<&RuntimeType> {
        self.root_type.as_ref()
    }

    /// Whether the filter is the reserved "no filtering" literal
    #[inline]
    pub fn is_any_deep(&self) -> bool {
        &*self.filter == ANY_DEEP
    }

    /// Whether the expression was parsed already
    pub fn is_parsed(&self) -> bool {
        self.expression.get().is_some()
    }

    /// The parsed expression
    ///
    /// # Errors
    ///
    /// Returns the (memoized) `SyntaxError` of a malformed filter.
    pub fn expression(&self) -> Result<Arc<FilterExpression>, SyntaxError> {
        self.expression
            .get_or_init(|| self.parser.parse(&self.filter))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_once() {
        let parser = Arc::new(PurifierParser::default());
        let context = FilterContext::new("id,name", None, Arc::clone(&parser));
        assert!(!context.is_parsed());

        let first = context.expression().expect("valid");
        let second = context.expression().expect("valid");
        assert!(Arc::ptr_eq(&first, &second));
        assert!(context.is_parsed());
        assert_eq!(parser.stats().requests(), 1);
    }

    #[test]
    fn syntax_error_is_memoized() {
        let parser = Arc::new(PurifierParser::default());
        let context = FilterContext::new("user{", None, Arc::clone(&parser));

        let first = context.expression().expect_err("malformed");
        let second = context.expression().expect_err("malformed");
        assert_eq!(first, second);
        assert_eq!(parser.stats().misses, 1);
    }
}
