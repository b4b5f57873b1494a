//! JSON payload files

use std::path::Path;

use anyhow::Context;
use domain::{UploadFile, validate_payload};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Read and decode a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Read a JSON file and run the same checks a form does before submitting
pub fn read_validated<T: DeserializeOwned + Validate>(path: &Path) -> anyhow::Result<T> {
    let payload: T = read_json(path)?;
    validate_payload(&payload).with_context(|| format!("{} failed validation", path.display()))?;
    Ok(payload)
}

/// Load an image from disk, guessing its content type from the extension
pub async fn read_upload(path: &Path) -> anyhow::Result<UploadFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    Ok(UploadFile::guess(file_name, bytes)?)
}

#[cfg(test)]
mod tests {
    use domain::{ContentSection, PricingPlan};

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn reads_valid_plan() {
        let file = write_temp(
            r#"{ "name": "Growth", "price": "₹49,999", "description": "Scale up", "features": ["SEO"] }"#,
        );
        let plan: PricingPlan = read_validated(file.path()).unwrap();
        assert_eq!(plan.name, "Growth");
        assert_eq!(plan.cta_text, None);
        assert!(plan.extra.is_empty());
    }

    #[test]
    fn rejects_plan_without_features() {
        let file = write_temp(
            r#"{ "name": "Growth", "price": "₹49,999", "description": "Scale up", "features": [] }"#,
        );
        let err = read_validated::<PricingPlan>(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("features"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = write_temp("{ not json");
        let err = read_json::<ContentSection>(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn upload_guesses_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.webp");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let upload = read_upload(&path).await.unwrap();

        assert_eq!(upload.file_name(), "hero.webp");
        assert_eq!(upload.content_type(), "image/webp");
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        assert!(read_upload(&path).await.is_err());
    }
}
