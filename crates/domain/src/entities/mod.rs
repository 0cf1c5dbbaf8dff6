//! Entities fetched from the roster provider

mod category;
mod item;
mod roster;

pub use category::Category;
pub use item::{Ability, Item, ItemCategory};
pub use roster::{RosterEntry, RosterPage};
