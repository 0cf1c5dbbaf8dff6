//! Keyed query cache with request coalescing.
//!
//! Each key maps to a `QueryState` plus bookkeeping:
//! - at most one request per key is outstanding; callers arriving while it
//!   runs wait for the same result instead of issuing their own
//! - successful results are served without a request for `stale_time`
//! - failures are kept and shown, but never considered fresh, so the next
//!   request for the key tries again
//! - entries unused for `gc_time` are evicted
//!
//! The entry map is only locked for synchronous bookkeeping, never across an
//! await, and entries are replaced whole when a request settles.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use futures_channel::oneshot;

use pokedex_domain::QueryState;

use super::ChangeNotifier;
use crate::application::ServiceError;
use crate::config::PlayerConfig;
use crate::ports::outbound::ClockPort;

/// Query state as stored by the player's caches
pub type Query<V> = QueryState<V, ServiceError>;

/// Freshness and eviction windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub stale_time: Duration,
    pub gc_time: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::minutes(5),
            gc_time: Duration::minutes(10),
        }
    }
}

impl CachePolicy {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            stale_time: config.stale_time(),
            gc_time: config.gc_time(),
        }
    }
}

struct CacheEntry<V> {
    state: Query<V>,
    last_used: DateTime<Utc>,
    /// `Some` while a request is in flight; holds the callers joined to it
    waiters: Option<Vec<oneshot::Sender<Query<V>>>>,
}

impl<V> CacheEntry<V> {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            state: QueryState::idle(),
            last_used: now,
            waiters: None,
        }
    }

    fn in_flight(&self) -> bool {
        self.waiters.is_some()
    }
}

enum Plan<V> {
    Cached(Query<V>),
    Join(oneshot::Receiver<Query<V>>),
    Run,
}

pub struct QueryCache<K, V> {
    name: &'static str,
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
    policy: CachePolicy,
    clock: Arc<dyn ClockPort>,
    notifier: ChangeNotifier,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new(
        name: &'static str,
        policy: CachePolicy,
        clock: Arc<dyn ClockPort>,
        notifier: ChangeNotifier,
    ) -> Self {
        Self {
            name,
            entries: Mutex::new(HashMap::new()),
            policy,
            clock,
            notifier,
        }
    }

    /// Return the state for `key`, running `fetcher` if the cached state is
    /// absent, stale or failed and no request is already in flight.
    pub async fn fetch<F, Fut>(&self, key: K, fetcher: F) -> Query<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ServiceError>>,
    {
        let now = self.clock.now();
        self.collect_garbage_at(now);

        let plan = {
            let mut entries = self.lock();
            let entry = entries
                .entry(key.clone())
                .or_insert_with(|| CacheEntry::new(now));
            entry.last_used = now;

            if let Some(waiters) = entry.waiters.as_mut() {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                Plan::Join(rx)
            } else if entry.state.is_fresh(now, self.policy.stale_time) {
                Plan::Cached(entry.state.clone())
            } else {
                entry.waiters = Some(Vec::new());
                entry.state.begin_fetch();
                Plan::Run
            }
        };

        match plan {
            Plan::Cached(state) => {
                tracing::debug!(cache = self.name, key = ?key, "Serving fresh entry");
                state
            }
            Plan::Join(rx) => {
                tracing::debug!(cache = self.name, key = ?key, "Joining in-flight request");
                match rx.await {
                    Ok(state) => state,
                    // The request was dropped before it settled
                    Err(_) => self.peek(&key),
                }
            }
            Plan::Run => {
                tracing::debug!(cache = self.name, key = ?key, "Fetching");
                self.notifier.notify();
                let guard = InFlight {
                    cache: self,
                    key: Some(key.clone()),
                };
                let result = fetcher().await;
                guard.disarm();
                self.complete(key, result)
            }
        }
    }

    /// Current state for `key` without fetching; `Idle` when absent.
    pub fn peek(&self, key: &K) -> Query<V> {
        let now = self.clock.now();
        let mut entries = self.lock();
        match entries.get_mut(key) {
            Some(entry) => {
                entry.last_used = now;
                entry.state.clone()
            }
            None => QueryState::idle(),
        }
    }

    /// Mark `key` stale so the next `fetch` goes to the network.
    pub fn invalidate(&self, key: &K) {
        if let Some(entry) = self.lock().get_mut(key) {
            entry.state.invalidate();
        }
    }

    /// Evict entries unused for longer than `gc_time`. In-flight entries are
    /// kept. Returns the number of evicted entries.
    pub fn collect_garbage(&self) -> usize {
        self.collect_garbage_at(self.clock.now())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn collect_garbage_at(&self, now: DateTime<Utc>) -> usize {
        let gc_time = self.policy.gc_time;
        let removed = {
            let mut entries = self.lock();
            let before = entries.len();
            entries.retain(|_, entry| entry.in_flight() || now - entry.last_used < gc_time);
            before - entries.len()
        };
        if removed > 0 {
            tracing::debug!(cache = self.name, removed, "Evicted unused entries");
        }
        removed
    }

    fn complete(&self, key: K, result: Result<V, ServiceError>) -> Query<V> {
        let now = self.clock.now();
        if let Err(e) = &result {
            tracing::warn!(cache = self.name, key = ?key, error = %e, "Query failed");
        }

        let (state, waiters) = {
            let mut entries = self.lock();
            let entry = entries.entry(key).or_insert_with(|| CacheEntry::new(now));
            entry.state.settle(result, now);
            entry.last_used = now;
            (entry.state.clone(), entry.waiters.take().unwrap_or_default())
        };

        for waiter in waiters {
            let _ = waiter.send(state.clone());
        }
        self.notifier.notify();
        state
    }

    fn abandon(&self, key: &K) {
        tracing::debug!(cache = self.name, key = ?key, "Request dropped before completion");
        let waiters = match self.lock().get_mut(key) {
            Some(entry) => {
                entry.state.abandon_fetch();
                entry.waiters.take().unwrap_or_default()
            }
            None => Vec::new(),
        };
        // Dropping the senders wakes joined callers with the current snapshot
        drop(waiters);
        self.notifier.notify();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the in-flight mark if the driving future is dropped mid-request.
struct InFlight<'a, K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    cache: &'a QueryCache<K, V>,
    key: Option<K>,
}

impl<K, V> InFlight<'_, K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn disarm(mut self) {
        self.key = None;
    }
}

impl<K, V> Drop for InFlight<'_, K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.cache.abandon(&key);
        }
    }
}
