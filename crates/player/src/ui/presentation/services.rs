//! Service providers for the presentation layer
//!
//! The composition root hands the UI one `UiServices` value through Dioxus
//! context. Components reach the query client through `use_query_client`
//! and never see the HTTP adapter behind it.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::query::QueryClient;

#[derive(Clone)]
pub struct UiServices {
    pub queries: Arc<QueryClient>,
}

impl UiServices {
    pub fn new(queries: QueryClient) -> Self {
        Self {
            queries: Arc::new(queries),
        }
    }
}

/// Hook to access the QueryClient from context
pub fn use_query_client() -> Arc<QueryClient> {
    let services = use_context::<UiServices>();
    services.queries.clone()
}
