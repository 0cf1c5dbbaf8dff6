//! Pokedex player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_player::application::query::QueryClient;
use pokedex_player::application::services::PokedexService;
use pokedex_player::infrastructure::{ApiAdapter, SystemClock};
use pokedex_player::ui::presentation::UiServices;
use pokedex_player::PlayerConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = PlayerConfig::from_env();
    tracing::info!(
        api_base_url = %config.api_base_url,
        roster_limit = config.roster_limit,
        "Starting Pokedex Player"
    );

    // HTTP
    let raw_api = Arc::new(ApiAdapter::new(&config));
    let service = PokedexService::new(raw_api);

    // Query caches
    let queries = QueryClient::new(service, &config, Arc::new(SystemClock));

    dioxus::LaunchBuilder::new()
        .with_context(UiServices::new(queries))
        .launch(pokedex_player::app);
}
