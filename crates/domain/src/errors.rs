//! Domain-level errors

use thiserror::Error;

/// Errors raised while preparing data for the backend
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more fields failed submit-time validation
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Upload file could not be described (missing name, empty body)
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Payload could not be read as the expected shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl DomainError {
    /// Returns true if the error came from field validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("email: invalid".to_string());
        assert_eq!(err.to_string(), "Validation failed: email: invalid");
        assert!(err.is_validation());
    }

    #[test]
    fn invalid_upload_message() {
        let err = DomainError::InvalidUpload("empty file".to_string());
        assert_eq!(err.to_string(), "Invalid upload: empty file");
        assert!(!err.is_validation());
    }

    #[test]
    fn json_errors_become_invalid_payload() {
        let err: DomainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DomainError::InvalidPayload(_)));
    }
}
