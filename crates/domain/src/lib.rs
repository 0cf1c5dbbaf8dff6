//! Pokedex domain.
//!
//! Pure data model and derivation logic for the roster browser: validated
//! name tokens, fetched records, per-request query state, and the
//! filter/pagination state machine. Nothing in here performs I/O.

pub mod browse;
pub mod entities;
pub mod error;
pub mod query_state;
pub mod value_objects;

pub use browse::{derive_view, BrowseView, PageWindow, INITIAL_VISIBLE_COUNT, PAGE_SIZE};
pub use entities::{Ability, Category, Item, ItemCategory, RosterEntry, RosterPage};
pub use error::DomainError;
pub use query_state::{aggregate_status, AggregateStatus, QueryState, QueryStatus};
pub use value_objects::{BrowseFilters, CategoryName, ItemName};
