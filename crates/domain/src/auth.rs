//! Authentication payloads
//!
//! Passwords travel in plain `String`s because they are serialized into the
//! request body; `Debug` output redacts them.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /auth/login`
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginCredentials {
    /// Account email
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Account password
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

impl LoginCredentials {
    /// Create login credentials
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /auth/register`
#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    /// Account email
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Chosen password
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,

    /// Repeated password, must equal `password`
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl RegisterRequest {
    /// Create a registration request
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// Body of `PUT /auth/profile`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    /// New email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}
