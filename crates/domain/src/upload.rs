//! Image uploads

use std::fmt;

use crate::errors::DomainError;

/// An image to be sent as one multipart part
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadFile {
    /// Describe an upload with an explicit content type
    ///
    /// # Errors
    ///
    /// Returns an error if the file name or body is empty.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(DomainError::InvalidUpload(
                "file name must not be empty".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(DomainError::InvalidUpload(format!("{file_name} is empty")));
        }

        Ok(Self {
            file_name,
            content_type: content_type.into(),
            bytes,
        })
    }

    /// Describe an upload, guessing the content type from the file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file name or body is empty.
    pub fn guess(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self::new(file_name, content_type, bytes)
    }

    /// File name sent in the part's `Content-Disposition`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type of the part
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// File contents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the upload, returning its contents
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Map an image file extension to its MIME type
#[must_use]
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}
