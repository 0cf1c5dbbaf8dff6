//! Value objects - immutable, validated-by-construction types

mod browse_filters;
mod names;

pub use browse_filters::BrowseFilters;
pub use names::{CategoryName, ItemName};
