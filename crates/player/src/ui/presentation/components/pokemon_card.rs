//! Grid card for one roster entry
//!
//! Each card runs its own detail query for the category badges and sprite,
//! so cards fill in independently as responses arrive.

use dioxus::prelude::*;

use pokedex_domain::ItemName;

use crate::ui::presentation::hooks::use_cache_revision;
use crate::ui::presentation::services::use_query_client;
use crate::ui::Route;

#[component]
pub fn PokemonCard(name: ItemName) -> Element {
    let client = use_query_client();
    let _revision = use_cache_revision();

    {
        let client = client.clone();
        use_effect(use_reactive((&name,), move |(name,)| {
            let client = client.clone();
            spawn(async move {
                client.item_detail(name).await;
            });
        }));
    }

    let detail = client.peek_item_detail(&name);
    let item = detail.data();

    let badges = if detail.is_error() {
        rsx! { p { "Error loading types" } }
    } else if let Some(item) = item {
        rsx! {
            div {
                class: "badges",
                for category in item.category_names() {
                    span { key: "{category}", class: "badge", "{category}" }
                }
            }
        }
    } else {
        rsx! { p { "Loading types..." } }
    };

    let sprite = if detail.is_error() {
        rsx! { div { "Error loading image" } }
    } else if let Some(item) = item {
        match item.sprite_url.as_deref() {
            Some(url) => rsx! { img { class: "sprite", src: "{url}", alt: "{name} sprite" } },
            None => rsx! { div { class: "sprite sprite-placeholder" } },
        }
    } else {
        rsx! { div { class: "sprite sprite-placeholder" } }
    };

    rsx! {
        Link {
            class: "card",
            to: Route::DetailRoute { name: name.to_string() },
            {badges}
            {sprite}
            span { class: "card-name", "{name}" }
        }
    }
}
