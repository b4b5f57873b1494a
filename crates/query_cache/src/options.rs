//! Per-query options and status

use std::fmt;
use std::time::Duration;

/// Default age after which a cached result is refetched (5 minutes)
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(300);

/// Options for a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Cached results younger than this are returned without fetching
    pub stale_time: Duration,
    /// Additional attempts after a failed fetch
    pub retry: u32,
    /// Pause between attempts
    pub retry_delay: Duration,
    /// Disabled queries never fetch; they only return cached data
    pub enabled: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: DEFAULT_STALE_TIME,
            retry: 0,
            retry_delay: Duration::from_secs(1),
            enabled: true,
        }
    }
}

impl QueryOptions {
    /// Always refetch, never serve from cache
    #[must_use]
    pub fn always_fresh() -> Self {
        Self {
            stale_time: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Set the stale time
    #[must_use]
    pub const fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Set the retry count and delay
    #[must_use]
    pub const fn retry(mut self, retry: u32, delay: Duration) -> Self {
        self.retry = retry;
        self.retry_delay = delay;
        self
    }

    /// Enable or disable fetching
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Lifecycle of a query key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryStatus {
    /// Never fetched
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Success,
    /// The last fetch failed after all retries
    Error,
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}
