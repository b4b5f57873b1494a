//! Domain layer for the Trivesha API client
//!
//! Contains the data-transfer shapes exchanged with the Trivesha backend and
//! the presence/format checks applied before a form is submitted. All durable
//! state and business rules live on the server; nothing here owns a lifecycle.

pub mod auth;
pub mod contact;
pub mod content;
pub mod errors;
pub mod portfolio;
pub mod pricing;
pub mod upload;
pub mod user;
pub mod validation;

pub use auth::{LoginCredentials, ProfileUpdate, RegisterRequest};
pub use contact::{ContactQuery, ContactStatus, ContactSubmission, ContactUpdate};
pub use content::ContentSection;
pub use errors::DomainError;
pub use portfolio::{BulkStatusUpdate, PortfolioProject, PortfolioQuery, ProjectStatus};
pub use pricing::{DEFAULT_CTA_TEXT, PricingPlan, ReorderItem};
pub use upload::UploadFile;
pub use user::{UserQuery, UserRole, UserUpdate};
pub use validation::validate_payload;
