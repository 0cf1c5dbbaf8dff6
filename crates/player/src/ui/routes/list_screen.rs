//! List screen - search, category filter and the paginated card grid

use dioxus::prelude::*;

use pokedex_domain::{aggregate_status, derive_view, BrowseFilters, CategoryName, PageWindow};

use super::Route;
use crate::application::query::Query;
use crate::state::BrowseQuery;
use crate::ui::presentation::components::PokemonCard;
use crate::ui::presentation::hooks::use_cache_revision;
use crate::ui::presentation::services::use_query_client;

#[component]
pub fn ListRoute(query: BrowseQuery) -> Element {
    let client = use_query_client();
    let navigator = use_navigator();
    let mut window = use_signal(PageWindow::default);
    let _revision = use_cache_revision();

    let filters = query.filters().clone();
    let selected = filters.categories().to_vec();

    // Roster and category list do not depend on the filters
    {
        let client = client.clone();
        use_effect(move || {
            let roster_client = client.clone();
            spawn(async move {
                roster_client.roster().await;
            });
            let list_client = client.clone();
            spawn(async move {
                list_client.category_list().await;
            });
        });
    }

    // One member query per selected category, fetched concurrently
    {
        let client = client.clone();
        use_effect(use_reactive((&selected,), move |(selected,)| {
            if selected.is_empty() {
                return;
            }
            let client = client.clone();
            spawn(async move {
                client.fetch_memberships(&selected).await;
            });
        }));
    }

    // Any change of filters starts the window over, including a return to
    // filters seen before (typing then deleting, Back/Forward).
    use_effect(use_reactive((&filters,), move |(filters,)| {
        window.write().sync(&filters);
    }));

    // The address bar is the only store for both fields; every edit pushes
    // the whole query as a new history entry.
    let commit = move |next: BrowseFilters| {
        tracing::debug!(
            search = next.search(),
            categories = next.categories().len(),
            "Updating browse query"
        );
        navigator.push(Route::ListRoute {
            query: BrowseQuery::new(next),
        });
    };

    let roster = client.peek_roster();
    let category_list = client.peek_category_list();
    let memberships = client.memberships(&selected);
    let status = aggregate_status(
        &roster,
        selected.iter().filter_map(|c| memberships.get(c)),
    );
    let visible_count = window.read().visible_count(&filters);
    let view = roster
        .data()
        .map(|roster| derive_view(roster, &memberships, &filters, visible_count));

    let on_search = {
        let filters = filters.clone();
        move |evt: FormEvent| commit(filters.with_search(evt.value()))
    };
    let on_clear = {
        let filters = filters.clone();
        move |_: MouseEvent| commit(filters.without_categories())
    };

    let results = match view {
        _ if status.loading => rsx! { div { "Loading pokemon..." } },
        _ if status.error.is_some() => rsx! { div { "Error loading pokemon." } },
        None => rsx! {},
        Some(view) if view.is_empty() => rsx! {
            div { "No pokemon found matching your search." }
        },
        Some(view) => {
            let filtered_len = view.filtered().len();
            let on_load_more = {
                let filters = filters.clone();
                move |_: MouseEvent| {
                    window.write().load_more(&filters, filtered_len);
                }
            };
            rsx! {
                div {
                    class: "card-grid",
                    for entry in view.displayed() {
                        PokemonCard { key: "{entry.name}", name: entry.name.clone() }
                    }
                }
                if view.has_more() {
                    div {
                        class: "load-more",
                        button { class: "button", onclick: on_load_more, "Load More" }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            h1 { class: "page-title", "Pokedex" }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search pokemon...",
                value: "{filters.search()}",
                oninput: on_search,
            }

            CategoryFilter {
                categories: category_list,
                filters: filters.clone(),
                on_change: move |next: BrowseFilters| commit(next),
            }

            if filters.has_categories() {
                div {
                    class: "load-more",
                    button { class: "button", onclick: on_clear, "Clear Types" }
                }
            }

            {results}
        }
    }
}

/// Category checkboxes with their own loading and error states
#[component]
fn CategoryFilter(
    categories: Query<Vec<CategoryName>>,
    filters: BrowseFilters,
    on_change: EventHandler<BrowseFilters>,
) -> Element {
    if categories.is_loading() {
        return rsx! {
            div { class: "type-filter", "Loading types..." }
        };
    }
    if categories.is_error() {
        return rsx! {
            div { class: "type-filter", "Error loading types." }
        };
    }
    let Some(names) = categories.data() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "type-filter",
            for name in names.iter().cloned() {
                label {
                    key: "{name}",
                    class: "type-option",
                    input {
                        r#type: "checkbox",
                        checked: filters.is_selected(&name),
                        onchange: {
                            let filters = filters.clone();
                            let name = name.clone();
                            move |_| {
                                let checked = !filters.is_selected(&name);
                                on_change.call(filters.with_category(name.clone(), checked));
                            }
                        },
                    }
                    "{name}"
                }
            }
        }
    }
}
