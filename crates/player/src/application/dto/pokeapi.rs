//! PokeAPI response shapes
//!
//! Only the fields the browser uses are declared; anything else in a
//! response is ignored.

use serde::{Deserialize, Serialize};

use pokedex_domain::{
    Ability, Category, CategoryName, DomainError, Item, ItemCategory, ItemName, RosterEntry,
    RosterPage,
};

/// `{name, url}` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceDto {
    pub name: String,
    pub url: String,
}

/// Paginated resource list (`GET /pokemon?limit=N`, `GET /type`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListDto {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResourceDto>,
}

impl ResourceListDto {
    pub fn into_roster(self) -> Result<RosterPage, DomainError> {
        let entries = self
            .results
            .into_iter()
            .map(|r| {
                Ok(RosterEntry {
                    name: ItemName::new(&r.name)?,
                    url: r.url,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(RosterPage {
            total_count: self.count,
            entries,
        })
    }

    pub fn into_category_names(self) -> Result<Vec<CategoryName>, DomainError> {
        self.results
            .into_iter()
            .map(|r| CategoryName::new(&r.name))
            .collect()
    }
}

/// One member of a type (`GET /type/{name}` -> `pokemon[]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMemberDto {
    pub pokemon: NamedResourceDto,
    pub slot: u8,
}

/// Type detail (`GET /type/{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDetailDto {
    pub pokemon: Vec<TypeMemberDto>,
}

impl TypeDetailDto {
    pub fn into_category(self, name: CategoryName) -> Result<Category, DomainError> {
        let members = self
            .pokemon
            .into_iter()
            .map(|m| ItemName::new(&m.pokemon.name))
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Category::new(name, members))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesDto {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlotDto {
    pub ability: NamedResourceDto,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlotDto {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResourceDto,
}

/// Creature detail (`GET /pokemon/{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetailDto {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: SpritesDto,
    pub abilities: Vec<AbilitySlotDto>,
    pub types: Vec<TypeSlotDto>,
}

impl PokemonDetailDto {
    pub fn into_item(self) -> Result<Item, DomainError> {
        let categories = self
            .types
            .into_iter()
            .map(|t| {
                Ok(ItemCategory {
                    name: CategoryName::new(&t.type_ref.name)?,
                    slot: t.slot,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Item {
            name: ItemName::new(&self.name)?,
            sprite_url: self.sprites.front_default,
            height: self.height,
            weight: self.weight,
            abilities: self
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                    slot: a.slot,
                })
                .collect(),
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roster_list_converts_in_order() {
        let dto: ResourceListDto = serde_json::from_value(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=151&limit=151",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }))
        .unwrap();

        let roster = dto.into_roster().unwrap();
        assert_eq!(roster.total_count, 1302);
        let names: Vec<_> = roster.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["bulbasaur", "ivysaur"]);
    }

    #[test]
    fn detail_ignores_unknown_fields_and_keeps_slot_order() {
        let dto: PokemonDetailDto = serde_json::from_value(json!({
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "sprites": {"front_default": "https://img/1.png", "back_default": null},
            "abilities": [
                {"ability": {"name": "overgrow", "url": "u"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll", "url": "u"}, "is_hidden": true, "slot": 3}
            ],
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "u"}},
                {"slot": 2, "type": {"name": "poison", "url": "u"}}
            ]
        }))
        .unwrap();

        let item = dto.into_item().unwrap();
        assert_eq!(item.name.as_str(), "bulbasaur");
        assert_eq!(item.sprite_url.as_deref(), Some("https://img/1.png"));
        assert_eq!(item.abilities.len(), 2);
        assert!(item.abilities[1].is_hidden);
        let categories: Vec<_> = item.category_names().map(|c| c.as_str()).collect();
        assert_eq!(categories, ["grass", "poison"]);
    }

    #[test]
    fn null_sprite_is_allowed() {
        let dto: PokemonDetailDto = serde_json::from_value(json!({
            "name": "missingno",
            "height": 1,
            "weight": 1,
            "sprites": {"front_default": null},
            "abilities": [],
            "types": []
        }))
        .unwrap();
        assert_eq!(dto.into_item().unwrap().sprite_url, None);
    }

    #[test]
    fn type_members_become_a_set() {
        let dto: TypeDetailDto = serde_json::from_value(json!({
            "name": "grass",
            "pokemon": [
                {"pokemon": {"name": "bulbasaur", "url": "u"}, "slot": 1},
                {"pokemon": {"name": "oddish", "url": "u"}, "slot": 1}
            ]
        }))
        .unwrap();
        let category = dto
            .into_category(CategoryName::new("grass").unwrap())
            .unwrap();
        assert_eq!(category.members.len(), 2);
        assert!(category.contains(&ItemName::new("oddish").unwrap()));
    }
}
