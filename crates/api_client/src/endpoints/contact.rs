//! `/contact` endpoints

use domain::{ContactQuery, ContactSubmission, ContactUpdate};
use serde_json::Value;

use crate::client::{ApiClient, encode_segment};
use crate::error::ApiError;

/// Contact form submission and the admin inbox
#[derive(Debug, Clone, Copy)]
pub struct ContactApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ContactApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /contact`: public, needs no session
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn submit_form(self, submission: &ContactSubmission) -> Result<Value, ApiError> {
        self.client.post("/contact", submission).await
    }

    /// `GET /contact/admin`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_contacts(self, query: &ContactQuery) -> Result<Value, ApiError> {
        self.client.get_with_query("/contact/admin", query).await
    }

    /// `GET /contact/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_contact(self, id: &str) -> Result<Value, ApiError> {
        self.client.get(&contact_path(id)?).await
    }

    /// `PUT /contact/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update_contact(self, id: &str, update: &ContactUpdate) -> Result<Value, ApiError> {
        self.client.put(&contact_path(id)?, update).await
    }

    /// `DELETE /contact/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete_contact(self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&contact_path(id)?).await
    }

    /// `GET /contact/admin/stats`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_stats(self) -> Result<Value, ApiError> {
        self.client.get("/contact/admin/stats").await
    }
}

fn contact_path(id: &str) -> Result<String, ApiError> {
    Ok(format!("/contact/admin/{}", encode_segment(id)?))
}
