//! Query layer - keyed caching of provider requests
//!
//! `QueryCache` is the generic keyed cache; `QueryClient` instantiates one
//! per resource kind and is what the UI holds.

mod cache;
mod client;
mod notifier;

pub use cache::{CachePolicy, Query, QueryCache};
pub use client::QueryClient;
pub use notifier::ChangeNotifier;
