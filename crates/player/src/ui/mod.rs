use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must run inside the Dioxus runtime: spawns the cache subscription.
    presentation::hooks::use_cache_revision_provider();

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/main.css"),
        }

        div {
            class: "app-shell",
            Router::<routes::Route> {}
        }
    }
}
