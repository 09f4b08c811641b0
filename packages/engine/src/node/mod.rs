//! Filter expression node model
//!
//! A parsed filter expression is an ordered list of [`Node`]s. Every node
//! carries a [`Name`] selector and a pure match-strength function used by the
//! matcher to rank siblings.

mod core;
mod name;

pub use self::core::{FilterExpression, Node};
pub use self::name::{ANY_DEEP, ANY_SHALLOW, BASE_VIEW, FULL_VIEW, GlobPattern, Name};
