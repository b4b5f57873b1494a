//! Contact form submissions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Follow-up state of a contact submission in the admin inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    /// Not yet opened
    #[default]
    New,
    /// Opened by an admin
    Read,
    /// Answered
    Replied,
    /// Closed out
    Archived,
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Read => write!(f, "read"),
            Self::Replied => write!(f, "replied"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            _ => Err(format!(
                "Invalid contact status: {s}. Use 'new', 'read', 'replied' or 'archived'"
            )),
        }
    }
}

/// Body of `POST /contact`, sent by the public contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Visitor name
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    /// Reply-to address
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Kind of project, e.g. "Website Development"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Budget band, e.g. "₹1L - ₹3L"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    /// Timeline band, e.g. "1-3 months"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,

    /// Free-text message
    #[validate(length(min = 1, message = "is required"))]
    pub message: String,

    /// Set by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactSubmission {
    /// Create a submission with only the required fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Body of `PUT /contact/admin/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    /// New follow-up state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,

    /// Internal admin notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query parameters for the admin contact inbox
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactQuery {
    /// Filter by follow-up state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,

    /// Free-text search over name, email and message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// 1-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
