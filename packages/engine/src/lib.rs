//! # Purifier Engine
//!
//! Field-selection filter engine for serializers. A compact filter DSL
//! (`id,name`, `user{firstName,lastName}`, `**`) is parsed once and then
//! asked, field by field, whether a root-to-leaf path should be written.
//!
//! ## Features
//!
//! - **Squiggly-style DSL** with nested blocks, wildcards, globs, negation and views
//! - **Match strength ranking** so the most specific sibling wins
//! - **View resolution** through pluggable introspection collaborators
//! - **Lock-free caches** for parsed expressions and match outcomes
//! - **Scoped filters** per thread or per tokio task
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use purifier_engine::prelude::*;
//!
//! let introspector = Arc::new(BeanInfoIntrospector::default());
//! introspector.register(BeanInfo::builder("User").plain("id").plain("email"));
//!
//! let filter = PurifierFilter::new(introspector, &PurifierConfig::default());
//! let context = FilterContext::new("id", None, PurifierParser::global());
//! let user = Some(RuntimeType::concrete("User"));
//!
//! assert!(filter.include(&context, &Path::root("id", user.clone())).unwrap());
//! assert!(!filter.include(&context, &Path::root("email", user)).unwrap());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod introspect;
pub mod matcher;
pub mod node;
pub mod parser;
pub mod path;
pub mod prelude;
pub mod telemetry;

pub use error::{PurifierError, PurifierResult};
pub use filter::PurifierFilter;
