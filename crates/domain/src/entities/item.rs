//! Item entity - one creature's detail record

use serde::{Deserialize, Serialize};

use crate::value_objects::{CategoryName, ItemName};

/// An ability an item can have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    /// Hidden abilities are annotated as such on the detail screen
    pub is_hidden: bool,
    pub slot: u8,
}

/// A category an item belongs to, in provider slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub name: CategoryName,
    pub slot: u8,
}

/// Full detail for one item. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemName,
    /// Front-facing sprite; the provider returns null for some forms
    pub sprite_url: Option<String>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub abilities: Vec<Ability>,
    pub categories: Vec<ItemCategory>,
}

impl Item {
    /// Ability label as rendered on the detail screen
    pub fn ability_label(ability: &Ability) -> String {
        if ability.is_hidden {
            format!("{} (hidden)", ability.name)
        } else {
            ability.name.clone()
        }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories.iter().map(|c| &c.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_abilities_are_annotated() {
        let visible = Ability {
            name: "overgrow".into(),
            is_hidden: false,
            slot: 1,
        };
        let hidden = Ability {
            name: "chlorophyll".into(),
            is_hidden: true,
            slot: 3,
        };
        assert_eq!(Item::ability_label(&visible), "overgrow");
        assert_eq!(Item::ability_label(&hidden), "chlorophyll (hidden)");
    }
}
