//! Route table
//!
//! `/` is the list screen; its query segment carries the search term and
//! category selection. `/{name}` is the detail screen for one item.

use dioxus::prelude::*;

use crate::state::BrowseQuery;

mod detail_screen;
mod list_screen;

pub use detail_screen::DetailRoute;
pub use list_screen::ListRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:..query")]
    ListRoute { query: BrowseQuery },
    #[route("/:name")]
    DetailRoute { name: String },
}
