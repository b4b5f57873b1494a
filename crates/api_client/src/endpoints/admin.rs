//! `/admin` endpoints

use domain::{UserQuery, UserUpdate};
use serde_json::Value;

use crate::client::{ApiClient, encode_segment};
use crate::error::ApiError;

/// User management and dashboard statistics
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /admin/users`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_users(self, query: &UserQuery) -> Result<Value, ApiError> {
        self.client.get_with_query("/admin/users", query).await
    }

    /// `GET /admin/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_user(self, id: &str) -> Result<Value, ApiError> {
        self.client.get(&user_path(id)?).await
    }

    /// `PUT /admin/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update_user(self, id: &str, update: &UserUpdate) -> Result<Value, ApiError> {
        self.client.put(&user_path(id)?, update).await
    }

    /// `DELETE /admin/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete_user(self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&user_path(id)?).await
    }

    /// `GET /admin/stats`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_stats(self) -> Result<Value, ApiError> {
        self.client.get("/admin/stats").await
    }
}

fn user_path(id: &str) -> Result<String, ApiError> {
    Ok(format!("/admin/users/{}", encode_segment(id)?))
}
