//! Endpoint namespaces
//!
//! One borrowed view over [`ApiClient`](crate::ApiClient) per backend
//! resource. Every method is a fixed verb and path with its arguments passed
//! through unchanged; responses come back as the decoded JSON body.

mod admin;
mod auth;
mod contact;
mod content;
mod portfolio;
mod pricing;
mod upload;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use contact::ContactApi;
pub use content::ContentApi;
pub use portfolio::PortfolioApi;
pub use pricing::PricingApi;
pub use upload::UploadApi;
