//! Browser HTTP client using gloo-net (fetch API)

use gloo_net::http::Request;
use serde_json::Value;

use super::join_url;
use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// Client for the roster provider's REST API
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(url = %url, "GET");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(url = %url, status, "Provider returned error status");
            return Err(ApiError::Http { status, message });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
