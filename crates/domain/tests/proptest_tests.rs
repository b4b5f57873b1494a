//! Property-based tests for domain types
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    ContactStatus, LoginCredentials, ProjectStatus, RegisterRequest, ReorderItem, UploadFile,
    UserRole, upload::content_type_for, validate_payload,
};
use proptest::prelude::*;

// ============================================================================
// ReorderItem Property Tests
// ============================================================================

mod reorder_tests {
    use super::*;

    proptest! {
        #[test]
        fn sequence_preserves_ids_and_numbers_positions(
            ids in prop::collection::vec("[a-f0-9]{24}", 0..20)
        ) {
            let items = ReorderItem::sequence(&ids);

            prop_assert_eq!(items.len(), ids.len());
            for (position, (item, id)) in items.iter().zip(&ids).enumerate() {
                prop_assert_eq!(&item.id, id);
                prop_assert_eq!(item.order as usize, position);
            }
        }

        #[test]
        fn sequence_serializes_as_id_order_pairs(
            ids in prop::collection::vec("[a-z]{1,8}", 1..10)
        ) {
            let json = serde_json::to_value(ReorderItem::sequence(&ids)).unwrap();
            let array = json.as_array().unwrap();

            prop_assert_eq!(array.len(), ids.len());
            for entry in array {
                let object = entry.as_object().unwrap();
                prop_assert_eq!(object.len(), 2);
                prop_assert!(object.contains_key("id"));
                prop_assert!(object.contains_key("order"));
            }
        }
    }
}

// ============================================================================
// Status Enum Property Tests
// ============================================================================

mod status_tests {
    use super::*;

    fn project_status() -> impl Strategy<Value = ProjectStatus> {
        prop_oneof![
            Just(ProjectStatus::Draft),
            Just(ProjectStatus::Published),
            Just(ProjectStatus::Archived),
        ]
    }

    fn contact_status() -> impl Strategy<Value = ContactStatus> {
        prop_oneof![
            Just(ContactStatus::New),
            Just(ContactStatus::Read),
            Just(ContactStatus::Replied),
            Just(ContactStatus::Archived),
        ]
    }

    proptest! {
        #[test]
        fn project_status_display_parses_back(status in project_status()) {
            let parsed: ProjectStatus = status.to_string().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        #[test]
        fn project_status_parse_ignores_case(status in project_status()) {
            let parsed: ProjectStatus = status.to_string().to_uppercase().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        #[test]
        fn project_status_wire_name_matches_display(status in project_status()) {
            let json = serde_json::to_value(status).unwrap();
            let display = status.to_string();
            prop_assert_eq!(json.as_str(), Some(display.as_str()));
        }

        #[test]
        fn contact_status_display_parses_back(status in contact_status()) {
            let parsed: ContactStatus = status.to_string().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        #[test]
        fn unknown_role_is_rejected(name in "[a-z]{3,10}") {
            prop_assume!(name != "user" && name != "admin");
            prop_assert!(name.parse::<UserRole>().is_err());
        }
    }
}

// ============================================================================
// Validation Property Tests
// ============================================================================

mod validation_tests {
    use super::*;

    proptest! {
        #[test]
        fn well_formed_login_validates(
            user in "[a-z]{1,12}",
            domain in "[a-z]{2,10}",
            password in "[ -~]{1,32}"
        ) {
            let credentials = LoginCredentials::new(format!("{user}@{domain}.com"), password);
            prop_assert!(validate_payload(&credentials).is_ok());
        }

        #[test]
        fn email_without_at_sign_is_rejected(email in "[a-z.]{1,20}") {
            let credentials = LoginCredentials::new(email, "secret1");
            prop_assert!(validate_payload(&credentials).is_err());
        }

        #[test]
        fn short_passwords_fail_registration(password in "[a-z0-9]{0,5}") {
            let request = RegisterRequest::new("Asha", "asha@example.com", password.clone(), password);
            let err = validate_payload(&request).unwrap_err();
            prop_assert!(err.to_string().contains("password"));
        }

        #[test]
        fn mismatched_confirmation_fails_registration(
            password in "[a-z0-9]{6,16}",
            confirm in "[a-z0-9]{6,16}"
        ) {
            prop_assume!(password != confirm);
            let request = RegisterRequest::new("Asha", "asha@example.com", password, confirm);
            let err = validate_payload(&request).unwrap_err();
            prop_assert!(err.to_string().contains("confirmPassword") || err.to_string().contains("confirm_password"));
        }
    }
}

// ============================================================================
// Upload Property Tests
// ============================================================================

mod upload_tests {
    use super::*;

    proptest! {
        #[test]
        fn content_type_ignores_extension_case(
            stem in "[a-z]{1,10}",
            ext in prop_oneof![Just("png"), Just("jpg"), Just("webp"), Just("gif")]
        ) {
            let lower = content_type_for(&format!("{stem}.{ext}"));
            let upper = content_type_for(&format!("{stem}.{}", ext.to_uppercase()));
            prop_assert_eq!(lower, upper);
            prop_assert!(lower.starts_with("image/"));
        }

        #[test]
        fn non_empty_upload_is_accepted(
            name in "[a-z]{1,10}\\.png",
            bytes in prop::collection::vec(any::<u8>(), 1..256)
        ) {
            let file = UploadFile::guess(name, bytes.clone()).unwrap();
            prop_assert_eq!(file.content_type(), "image/png");
            prop_assert_eq!(file.bytes(), bytes.as_slice());
        }
    }
}
