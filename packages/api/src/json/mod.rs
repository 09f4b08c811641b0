//! Reference host for `serde_json::Value` trees
//!
//! Walks a JSON value the way a serializer walks an object graph: fields in
//! declaration order for registered types, keys in map order for maps. Each
//! candidate field is offered to the [`PurifierFilter`](purifier_engine::PurifierFilter).

mod walker;

pub use walker::{Excluded, JsonPurifier};
