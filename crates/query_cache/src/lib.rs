//! Query cache
//!
//! A memoized-fetch utility for server data: results are cached per
//! [`QueryKey`], served from memory while younger than the stale time, and
//! refetched (with an optional retry count) once stale or invalidated.
//! Mutations invalidate one related key on success.
//!
//! # Example
//!
//! ```rust,ignore
//! use query_cache::{QueryClient, QueryOptions, keys};
//!
//! let queries = QueryClient::new();
//! let plans: serde_json::Value = queries
//!     .fetch_query(&keys::pricing_plans(), &QueryOptions::default(), || {
//!         api.pricing().get_plans()
//!     })
//!     .await?;
//!
//! queries
//!     .mutate(api.pricing().toggle_popular(id), &keys::pricing_plans())
//!     .await?;
//! ```

mod client;
mod error;
mod key;
pub mod keys;
mod options;

pub use client::{QueryCacheStats, QueryClient, QueryClientConfig};
pub use error::QueryError;
pub use key::QueryKey;
pub use options::{QueryOptions, QueryStatus};
