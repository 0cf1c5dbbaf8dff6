//! Hooks bridging the query caches into Dioxus reactivity

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::services::use_query_client;

/// Bumped once per cache state change
#[derive(Clone, Copy)]
struct CacheRevision(Signal<u64>);

/// Install the shared revision signal. Called once, at the app root.
pub fn use_cache_revision_provider() {
    let client = use_query_client();
    let revision = use_context_provider(|| CacheRevision(Signal::new(0)));

    use_hook(move || {
        let mut changes = client.subscribe();
        let CacheRevision(mut revision) = revision;
        spawn(async move {
            while changes.next().await.is_some() {
                revision += 1;
            }
        });
    });
}

/// Subscribe the calling component to cache changes. Components read
/// cache state with the client's `peek_*` accessors and re-render through
/// this signal.
pub fn use_cache_revision() -> u64 {
    let CacheRevision(revision) = use_context::<CacheRevision>();
    revision()
}
