//! Raw API Port - Object-safe HTTP boundary
//!
//! The roster provider is a read-only JSON API, so the transport boundary is a
//! single GET returning untyped JSON. Adapters implement it per platform; the
//! application layer (`PokedexService`) turns the JSON into domain records.

use serde_json::Value;
use thiserror::Error;

/// Transport-level failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// The provider answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET `path` (relative to the provider base URL, query string included)
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
}
