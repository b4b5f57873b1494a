//! Trivesha API client
//!
//! Typed access to the Trivesha agency backend: a configured HTTP transport,
//! the bearer-token interceptor pair, and one endpoint namespace per resource
//! (auth, pricing, admin, portfolio, content, upload, contact).
//!
//! # Architecture
//!
//! [`ApiClient`] owns the `reqwest` client and an [`AuthInterceptor`]. The
//! interceptor reads the token from a [`SessionStore`] before each request and,
//! on any 401, clears the session and hands the login route to a
//! [`Navigator`]. Namespaces such as [`PricingApi`] borrow the client and map
//! one method to one verb + path.
//!
//! # Example
//!
//! ```rust,ignore
//! use api_client::{ApiClient, ApiConfig};
//!
//! let client = ApiClient::in_memory(ApiConfig::default())?;
//! let plans = client.pricing().get_plans().await?;
//! let project = client.portfolio().get_by_slug("spice-route").await?;
//! ```

mod client;
mod config;
pub mod endpoints;
mod error;
mod interceptor;
pub mod session;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL, LOGIN_ROUTE};
pub use endpoints::{
    AdminApi, AuthApi, ContactApi, ContentApi, PortfolioApi, PricingApi, UploadApi,
};
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use interceptor::AuthInterceptor;
pub use session::{
    FileSessionStore, MemorySessionStore, Navigator, NoopNavigator, RecordingNavigator, Session,
    SessionStore, TOKEN_KEY, USER_KEY,
};
