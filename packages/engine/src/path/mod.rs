//! Traversal paths
//!
//! A [`Path`] is the root-to-current sequence of fields visited by the host
//! serializer. Each [`PathElement`] carries the field name and the runtime
//! type of the value that declares it.

mod element;
mod key;

pub use element::{PathElement, RuntimeType, TypeKind};
pub use key::{Path, PathKey};
