//! Address-bar state
//!
//! The router's query segment is the only store for the list screen's
//! search term and category selection.

mod url_sync;

pub use url_sync::{BrowseQuery, SEARCH_PARAM, TYPE_PARAM};
