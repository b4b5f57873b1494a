//! Query error types

use thiserror::Error;

/// Errors returned by [`QueryClient::fetch_query`](crate::QueryClient::fetch_query)
#[derive(Debug, Error)]
pub enum QueryError<E> {
    /// The fetcher failed on every attempt; holds the last error
    #[error(transparent)]
    Fetch(E),

    /// A cached value could not be encoded or decoded
    #[error("Cache codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The query is disabled and nothing is cached
    #[error("Query is disabled")]
    Disabled,
}

impl<E> QueryError<E> {
    /// The fetcher error, if that is what this is
    pub fn into_fetch_error(self) -> Option<E> {
        match self {
            Self::Fetch(e) => Some(e),
            _ => None,
        }
    }
}
