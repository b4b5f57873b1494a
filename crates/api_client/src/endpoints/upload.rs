//! `/upload` endpoints

use domain::UploadFile;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::client::{ApiClient, encode_segment};
use crate::error::ApiError;

/// Multipart field carrying a single image
pub const IMAGE_FIELD: &str = "image";

/// Multipart field repeated once per image in a batch upload
pub const IMAGES_FIELD: &str = "images";

/// Image upload endpoints
#[derive(Debug, Clone, Copy)]
pub struct UploadApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UploadApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /upload/image` as `multipart/form-data` with one `image` part
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the content type is not a valid MIME
    /// type, otherwise the transport error unchanged.
    pub async fn upload_image(self, file: UploadFile) -> Result<Value, ApiError> {
        let form = Form::new().part(IMAGE_FIELD, to_part(file)?);
        self.client.post_multipart("/upload/image", form).await
    }

    /// `POST /upload/images` with one `images` part per file
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if no files are given or a content type is
    /// not a valid MIME type, otherwise the transport error unchanged.
    pub async fn upload_images(self, files: Vec<UploadFile>) -> Result<Value, ApiError> {
        if files.is_empty() {
            return Err(ApiError::InvalidRequest(
                "at least one image is required".to_string(),
            ));
        }

        let mut form = Form::new();
        for file in files {
            form = form.part(IMAGES_FIELD, to_part(file)?);
        }
        self.client.post_multipart("/upload/images", form).await
    }

    /// `DELETE /upload/image/{filename}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete_image(self, filename: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/upload/image/{}", encode_segment(filename)?))
            .await
    }

    /// `GET /upload/images`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn list_images(self) -> Result<Value, ApiError> {
        self.client.get("/upload/images").await
    }
}

fn to_part(file: UploadFile) -> Result<Part, ApiError> {
    let file_name = file.file_name().to_string();
    let content_type = file.content_type().to_string();
    Part::bytes(file.into_bytes())
        .file_name(file_name)
        .mime_str(&content_type)
        .map_err(|e| ApiError::InvalidRequest(format!("invalid content type {content_type}: {e}")))
}
