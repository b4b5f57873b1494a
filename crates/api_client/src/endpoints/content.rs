//! `/content` endpoints

use domain::ContentSection;
use serde_json::Value;

use crate::client::{ApiClient, encode_segment};
use crate::error::ApiError;

/// CMS section endpoints
#[derive(Debug, Clone, Copy)]
pub struct ContentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ContentApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /content`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_sections(self) -> Result<Value, ApiError> {
        self.client.get("/content").await
    }

    /// `GET /content/{section}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_section(self, section: &str) -> Result<Value, ApiError> {
        self.client.get(&section_path(section)?).await
    }

    /// `GET /content/schema/{section}`: field layout of a section
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_schema(self, section: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/content/schema/{}", encode_segment(section)?))
            .await
    }

    /// `POST /content`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create_section(self, section: &ContentSection) -> Result<Value, ApiError> {
        self.client.post("/content", section).await
    }

    /// `PUT /content/{section}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update_section(
        self,
        key: &str,
        section: &ContentSection,
    ) -> Result<Value, ApiError> {
        self.client.put(&section_path(key)?, section).await
    }

    /// `DELETE /content/{section}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete_section(self, section: &str) -> Result<Value, ApiError> {
        self.client.delete(&section_path(section)?).await
    }
}

fn section_path(section: &str) -> Result<String, ApiError> {
    Ok(format!("/content/{}", encode_segment(section)?))
}
