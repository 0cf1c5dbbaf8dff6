//! Category entity - a type and the set of items belonging to it

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::value_objects::{CategoryName, ItemName};

/// A category with its member item names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    pub members: HashSet<ItemName>,
}

impl Category {
    pub fn new(name: CategoryName, members: impl IntoIterator<Item = ItemName>) -> Self {
        Self {
            name,
            members: members.into_iter().collect(),
        }
    }

    pub fn contains(&self, item: &ItemName) -> bool {
        self.members.contains(item)
    }
}
