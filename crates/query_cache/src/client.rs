//! Moka-backed query client
//!
//! Results are stored as serialized JSON next to the time they were fetched.
//! Freshness is decided per call from the caller's stale time; moka only
//! handles capacity and idle eviction.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use moka::future::Cache;
use moka::notification::RemovalCause;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::QueryError;
use crate::key::QueryKey;
use crate::options::{QueryOptions, QueryStatus};

/// Maximum cache size in MB
const DEFAULT_MAX_CAPACITY_MB: u64 = 16;

/// Configuration for the query cache
#[derive(Debug, Clone, Copy)]
pub struct QueryClientConfig {
    /// Maximum capacity in megabytes
    pub max_capacity_mb: u64,
    /// Entries unused for this long are dropped
    pub gc_time: Duration,
}

impl Default for QueryClientConfig {
    fn default() -> Self {
        Self {
            max_capacity_mb: DEFAULT_MAX_CAPACITY_MB,
            gc_time: Duration::from_secs(300), // 5 minutes
        }
    }
}

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCacheStats {
    /// Calls answered from cache
    pub hits: u64,
    /// Calls that ran the fetcher
    pub misses: u64,
    /// Entries currently cached
    pub entries: u64,
}

#[derive(Clone)]
struct Entry {
    bytes: Arc<[u8]>,
    fetched_at: Instant,
}

impl Entry {
    fn is_fresh(&self, stale_time: Duration) -> bool {
        self.fetched_at.elapsed() < stale_time
    }
}

/// Memoized fetch with per-key status and manual invalidation
pub struct QueryClient {
    cache: Cache<QueryKey, Entry>,
    statuses: Arc<RwLock<HashMap<QueryKey, QueryStatus>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    /// Create a query client with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(QueryClientConfig::default())
    }

    /// Create a query client with custom configuration
    #[must_use]
    pub fn with_config(config: QueryClientConfig) -> Self {
        let max_capacity_bytes = config.max_capacity_mb * 1024 * 1024;
        let statuses: Arc<RwLock<HashMap<QueryKey, QueryStatus>>> = Arc::default();

        // Statuses follow their entries out of the cache on size or idle eviction
        let evicted = Arc::clone(&statuses);
        let cache = Cache::builder()
            .max_capacity(max_capacity_bytes)
            .time_to_idle(config.gc_time)
            .weigher(|_key: &QueryKey, entry: &Entry| -> u32 {
                entry.bytes.len().try_into().unwrap_or(u32::MAX)
            })
            .eviction_listener(move |key: Arc<QueryKey>, _entry: Entry, cause: RemovalCause| {
                if cause.was_evicted() {
                    evicted.write().remove(key.as_ref());
                }
            })
            .build();

        Self {
            cache,
            statuses,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached result for `key` if fresh, otherwise run `fetcher`
    ///
    /// The fetcher is attempted `1 + options.retry` times at most. A failed
    /// fetch leaves any previously cached data in place.
    ///
    /// # Errors
    ///
    /// Returns the last fetcher error, a codec error, or `Disabled` when the
    /// query is disabled and nothing is cached.
    #[instrument(skip_all, fields(key = %key), level = "debug")]
    pub async fn fetch_query<T, E, F, Fut>(
        &self,
        key: &QueryKey,
        options: &QueryOptions,
        fetcher: F,
    ) -> Result<T, QueryError<E>>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let cached = self.cache.get(key).await;

        if !options.enabled {
            return match cached {
                Some(entry) => Ok(serde_json::from_slice(&entry.bytes)?),
                None => Err(QueryError::Disabled),
            };
        }

        if let Some(entry) = cached.filter(|e| e.is_fresh(options.stale_time)) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Query cache hit");
            return Ok(serde_json::from_slice(&entry.bytes)?);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        self.set_status(key, QueryStatus::Loading);

        let mut attempt = 0;
        let error = loop {
            match fetcher().await {
                Ok(value) => {
                    self.store(key, &value).await.inspect_err(|_| {
                        self.set_status(key, QueryStatus::Error);
                    })?;
                    self.set_status(key, QueryStatus::Success);
                    debug!(attempt, "Query fetched");
                    return Ok(value);
                },
                Err(_) if attempt < options.retry => {
                    attempt += 1;
                    debug!(attempt, retry = options.retry, "Query fetch failed, retrying");
                    if !options.retry_delay.is_zero() {
                        tokio::time::sleep(options.retry_delay).await;
                    }
                },
                Err(e) => break e,
            }
        };

        warn!(attempts = attempt + 1, "Query fetch failed");
        self.set_status(key, QueryStatus::Error);
        Err(QueryError::Fetch(error))
    }

    /// Run a mutation and, if it succeeds, invalidate `invalidate`
    ///
    /// # Errors
    ///
    /// Returns the mutation's error unchanged; nothing is invalidated then.
    pub async fn mutate<T, E, Fut>(&self, mutation: Fut, invalidate: &QueryKey) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        let value = mutation.await?;
        self.invalidate(invalidate).await;
        Ok(value)
    }

    /// Drop every cached entry whose key starts with `prefix`
    ///
    /// Statuses under `prefix` go back to `Idle`, including those of keys
    /// whose last fetch failed and left nothing cached. Returns the number of
    /// entries removed.
    #[instrument(skip_all, fields(prefix = %prefix), level = "debug")]
    pub async fn invalidate(&self, prefix: &QueryKey) -> u64 {
        self.cache.run_pending_tasks().await;

        let keys_to_remove: Vec<QueryKey> = self
            .cache
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| (*k).clone())
            .collect();

        let mut count = 0u64;
        for key in keys_to_remove {
            self.cache.invalidate(&key).await;
            count += 1;
        }
        self.statuses.write().retain(|k, _| !k.starts_with(prefix));

        debug!(count, "Queries invalidated");
        count
    }

    /// Seed or overwrite the cached value for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub async fn set_query_data<T: Serialize>(
        &self,
        key: &QueryKey,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        self.store(key, value).await?;
        self.set_status(key, QueryStatus::Success);
        Ok(())
    }

    /// Cached value for `key`, fresh or not
    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entry = self.cache.get(key).await?;
        serde_json::from_slice(&entry.bytes)
            .inspect_err(|e| warn!(key = %key, error = %e, "Cached query data has another shape"))
            .ok()
    }

    /// Status of the last fetch for `key`
    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        self.statuses.read().get(key).copied().unwrap_or_default()
    }

    /// Hit/miss counters and entry count
    pub fn stats(&self) -> QueryCacheStats {
        QueryCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }

    async fn store<T: Serialize>(&self, key: &QueryKey, value: &T) -> Result<(), serde_json::Error> {
        let bytes = serde_json::to_vec(value)?;
        self.cache
            .insert(
                key.clone(),
                Entry {
                    bytes: bytes.into(),
                    fetched_at: Instant::now(),
                },
            )
            .await;
        Ok(())
    }

    fn set_status(&self, key: &QueryKey, status: QueryStatus) {
        self.statuses.write().insert(key.clone(), status);
    }
}
