//! Detail screen for one item, reached by name in the address path

use dioxus::prelude::*;

use pokedex_domain::Item;

use super::Route;
use crate::application::services::PokedexService;
use crate::ui::presentation::hooks::use_cache_revision;
use crate::ui::presentation::services::use_query_client;

#[component]
pub fn DetailRoute(name: String) -> Element {
    let client = use_query_client();
    let _revision = use_cache_revision();

    // An unusable name never reaches the provider
    let item_name = PokedexService::item_name(&name).ok();

    {
        let client = client.clone();
        use_effect(use_reactive((&item_name,), move |(item_name,)| {
            let Some(item_name) = item_name else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                client.item_detail(item_name).await;
            });
        }));
    }

    let detail = item_name.as_ref().map(|n| client.peek_item_detail(n));

    let body = match detail {
        None => {
            tracing::debug!(name = %name, "Rejected item name from route");
            rsx! { div { "Error loading pokemon details." } }
        }
        Some(detail) if detail.is_error() => rsx! { div { "Error loading pokemon details." } },
        Some(detail) => match detail.data() {
            Some(item) => rsx! { ItemDetail { item: item.clone() } },
            None => rsx! { div { "Loading pokemon details..." } },
        },
    };

    rsx! {
        div {
            Link {
                class: "back-link",
                to: Route::ListRoute { query: Default::default() },
                "Back to list"
            }
            {body}
        }
    }
}

#[component]
fn ItemDetail(item: Item) -> Element {
    let abilities: Vec<String> = item.abilities.iter().map(Item::ability_label).collect();

    rsx! {
        h1 { class: "detail-name", "{item.name}" }
        if let Some(url) = item.sprite_url.as_deref() {
            img { src: "{url}", alt: "{item.name}" }
        }
        p { "Height: {item.height}" }
        p { "Weight: {item.weight}" }

        div {
            class: "detail-section",
            h2 { "Abilities" }
            ul {
                for label in abilities {
                    li { key: "{label}", "{label}" }
                }
            }
        }

        div {
            class: "detail-section",
            h2 { "Types" }
            ul {
                for category in item.category_names() {
                    li { key: "{category}", "{category}" }
                }
            }
        }
    }
}
