//! Submit-time validation
//!
//! Wraps the `validator` crate so every payload reports its failures the same
//! way: `field: message` pairs, sorted by field name, joined with `; `.

use validator::{Validate, ValidationErrors};

use crate::errors::DomainError;

/// Validate a payload before it is sent to the backend
///
/// # Errors
///
/// Returns [`DomainError::ValidationError`] listing every failing field.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), DomainError> {
    payload
        .validate()
        .map_err(|e| DomainError::ValidationError(format_errors(&e)))
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "is required"))]
        name: String,
        #[validate(email(message = "must be a valid email"))]
        email: String,
    }

    #[test]
    fn valid_payload_passes() {
        let sample = Sample {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
        };
        assert!(validate_payload(&sample).is_ok());
    }

    #[test]
    fn failures_are_listed_by_field() {
        let sample = Sample {
            name: String::new(),
            email: "nope".to_string(),
        };
        let err = validate_payload(&sample).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: email: must be a valid email; name: is required"
        );
    }

    #[test]
    fn missing_message_falls_back_to_code() {
        #[derive(Validate)]
        struct Bare {
            #[validate(length(min = 2))]
            code: String,
        }

        let err = validate_payload(&Bare {
            code: "x".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: code: length");
    }
}
