//! Pokedex Service - typed access to the roster provider
//!
//! Issues the four read-only requests the browser needs and converts the
//! responses into domain records. No retries happen here; retry policy
//! belongs to the query cache.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use pokedex_domain::{Category, CategoryName, Item, ItemName, RosterPage};

use crate::application::dto::{PokemonDetailDto, ResourceListDto, TypeDetailDto};
use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct PokedexService {
    api: Arc<dyn RawApiPort>,
}

impl PokedexService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Validate a raw item name (e.g. a route parameter)
    pub fn item_name(raw: &str) -> Result<ItemName, ServiceError> {
        ItemName::new(raw).map_err(|e| ServiceError::InvalidArgument(e.to_string()))
    }

    /// Fetch the first `limit` roster entries
    pub async fn fetch_roster(&self, limit: u32) -> Result<RosterPage, ServiceError> {
        let dto: ResourceListDto = self.get(&format!("/pokemon?limit={limit}")).await?;
        dto.into_roster()
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Fetch every category name the provider knows
    pub async fn fetch_category_list(&self) -> Result<Vec<CategoryName>, ServiceError> {
        let dto: ResourceListDto = self.get("/type").await?;
        dto.into_category_names()
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Fetch the member set of one category
    pub async fn fetch_category_members(
        &self,
        name: &CategoryName,
    ) -> Result<Category, ServiceError> {
        let dto: TypeDetailDto = self.get(&format!("/type/{name}")).await?;
        dto.into_category(name.clone())
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Fetch one item's detail record
    pub async fn fetch_item_detail(&self, name: &ItemName) -> Result<Item, ServiceError> {
        let dto: PokemonDetailDto = self.get(&format!("/pokemon/{name}")).await?;
        dto.into_item()
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let value = self.api.get_json(path).await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Provider request failed");
            ServiceError::from(e)
        })?;
        serde_json::from_value(value).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Unexpected response shape");
            ServiceError::Parse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;

    fn service_with(mock: MockRawApiPort) -> PokedexService {
        PokedexService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn fetch_roster_requests_limit_and_parses() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path.to_string() == "/pokemon?limit=151")
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "count": 1302,
                    "next": null,
                    "previous": null,
                    "results": [
                        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
                    ]
                }))
            });

        let roster = service_with(mock).fetch_roster(151).await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.entries[0].name.as_str(), "bulbasaur");
    }

    #[tokio::test]
    async fn fetch_category_list_returns_names_in_order() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path.to_string() == "/type")
            .returning(|_| {
                Ok(json!({
                    "count": 2,
                    "next": null,
                    "previous": null,
                    "results": [
                        {"name": "normal", "url": "u"},
                        {"name": "fighting", "url": "u"}
                    ]
                }))
            });

        let names = service_with(mock).fetch_category_list().await.unwrap();
        let names: Vec<_> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["normal", "fighting"]);
    }

    #[tokio::test]
    async fn fetch_category_members_uses_category_path() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path.to_string() == "/type/fire")
            .returning(|_| {
                Ok(json!({
                    "pokemon": [
                        {"pokemon": {"name": "charmander", "url": "u"}, "slot": 1}
                    ]
                }))
            });

        let fire = CategoryName::new("fire").unwrap();
        let category = service_with(mock)
            .fetch_category_members(&fire)
            .await
            .unwrap();
        assert_eq!(category.name, fire);
        assert!(category.contains(&ItemName::new("charmander").unwrap()));
    }

    #[tokio::test]
    async fn fetch_item_detail_uses_lowercase_name() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path.to_string() == "/pokemon/pikachu")
            .returning(|_| {
                Ok(json!({
                    "name": "pikachu",
                    "height": 4,
                    "weight": 60,
                    "sprites": {"front_default": "https://img/25.png"},
                    "abilities": [],
                    "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}]
                }))
            });

        let name = PokedexService::item_name("Pikachu").unwrap();
        let item = service_with(mock).fetch_item_detail(&name).await.unwrap();
        assert_eq!(item.height, 4);
        assert_eq!(item.weight, 60);
    }

    #[tokio::test]
    async fn http_errors_become_network_errors() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: "Not Found".into(),
            })
        });

        let name = ItemName::new("nobody").unwrap();
        let err = service_with(mock).fetch_item_detail(&name).await.unwrap_err();
        assert!(matches!(err, ServiceError::Network(_)));
    }

    #[tokio::test]
    async fn wrong_shape_becomes_parse_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({"unexpected": true})));

        let err = service_with(mock).fetch_roster(151).await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[test]
    fn raw_names_are_validated() {
        assert!(matches!(
            PokedexService::item_name(""),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            PokedexService::item_name("mr/mime"),
            Err(ServiceError::InvalidArgument(_))
        ));
    }
}
