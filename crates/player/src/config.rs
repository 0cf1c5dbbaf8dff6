//! Player configuration
//!
//! Values come from environment variables with compiled-in defaults. On wasm
//! there is no process environment, so the defaults always apply there.

use chrono::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of roster entries the list screen works over
pub const DEFAULT_ROSTER_LIMIT: u32 = 151;

/// Successful results are served from cache for 5 minutes
pub const DEFAULT_STALE_TIME_MS: u64 = 300_000;

/// Entries unused for 10 minutes are evicted
pub const DEFAULT_GC_TIME_MS: u64 = 600_000;

/// Default request timeout in milliseconds (native HTTP client only)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_base_url: String,
    pub roster_limit: u32,
    pub stale_time_ms: u64,
    pub gc_time_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            gc_time_ms: DEFAULT_GC_TIME_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup; invalid or missing
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str, default: u64| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let api_base_url = lookup("POKEDEX_API_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base_url);

        let roster_limit = lookup("POKEDEX_ROSTER_LIMIT")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.roster_limit);

        Self {
            api_base_url,
            roster_limit,
            stale_time_ms: parsed("POKEDEX_STALE_TIME_MS", defaults.stale_time_ms),
            gc_time_ms: parsed("POKEDEX_GC_TIME_MS", defaults.gc_time_ms),
            request_timeout_ms: parsed("POKEDEX_REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
        }
    }

    pub fn stale_time(&self) -> Duration {
        i64::try_from(self.stale_time_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX)
    }

    pub fn gc_time(&self) -> Duration {
        i64::try_from(self.gc_time_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX)
    }
}
