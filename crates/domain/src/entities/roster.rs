//! Roster page - the fixed list of items the browser works over

use serde::{Deserialize, Serialize};

use crate::value_objects::ItemName;

/// One (name, reference) pair of the roster, in provider order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: ItemName,
    /// Provider URL of the item's detail resource
    pub url: String,
}

/// The first N items of the provider's roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPage {
    /// Total number of items the provider knows about (not just this page)
    pub total_count: u32,
    pub entries: Vec<RosterEntry>,
}

impl RosterPage {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
