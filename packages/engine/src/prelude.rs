//! Purifier Prelude
//!
//! The types a host needs to wire the engine into a serializer.

pub use crate::cache::{CacheSpec, MatchCache};
pub use crate::config::{ConfigurationError, PurifierConfig, Validator};
pub use crate::context::{
    ContextProvider, FilterContext, FilterGuard, FilterHolder, ScopedContextProvider, SimpleContextProvider,
};
pub use crate::error::{IntrospectionError, PurifierError, PurifierResult, SyntaxError};
pub use crate::filter::PurifierFilter;
pub use crate::introspect::{
    BeanInfo, BeanInfoBuilder, BeanInfoIntrospector, FieldInfo, Introspector, TypeRef, UnwrappedFields,
    ViewResolver,
};
pub use crate::matcher::{MatchOptions, Matcher};
pub use crate::node::{FilterExpression, Name, Node};
pub use crate::parser::{PurifierParser, parse_expression};
pub use crate::path::{Path, PathElement, RuntimeType, TypeKind};
pub use crate::telemetry::PurifierMetrics;
