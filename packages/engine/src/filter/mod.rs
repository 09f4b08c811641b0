//! Per-field include/exclude entry point

mod property_filter;

pub use property_filter::PurifierFilter;
