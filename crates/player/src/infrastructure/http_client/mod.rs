//! HTTP adapter for the roster provider
//!
//! Implements `RawApiPort` with `reqwest` on native targets and `gloo-net` in
//! the browser. The correct client is selected at compile time based on the
//! target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

/// Join a provider base URL and a request path.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://pokeapi.co/api/v2/", "/pokemon?limit=151"),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
        assert_eq!(
            join_url("https://pokeapi.co/api/v2", "type"),
            "https://pokeapi.co/api/v2/type"
        );
    }
}
