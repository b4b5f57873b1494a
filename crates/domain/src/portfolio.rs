//! Portfolio projects

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Publication state of a portfolio project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Visible only in the admin panel
    #[default]
    Draft,
    /// Listed on the public portfolio page
    Published,
    /// Hidden everywhere except the archive filter
    Archived,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(format!(
                "Invalid project status: {s}. Use 'draft', 'published' or 'archived'"
            )),
        }
    }
}

/// A portfolio case study
///
/// Unmodelled fields are kept in `extra` and written back as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    /// Server-assigned identifier (absent when creating)
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Project title
    #[validate(length(min = 1, message = "is required"))]
    pub title: String,

    /// Category used by the portfolio filter, e.g. "Web Development"
    #[validate(length(min = 1, message = "is required"))]
    pub category: String,

    /// Client name
    #[validate(length(min = 1, message = "is required"))]
    pub client: String,

    /// Technology/skill tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Cover image URL or upload reference
    #[validate(length(min = 1, message = "is required"))]
    pub image: String,

    /// URL slug; generated by the server when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Shown in the featured strip on the home page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Outcome bullet points, e.g. "+120% organic traffic"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,

    /// Publication state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,

    /// Sort position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Fields not modelled above, passed through as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `PATCH /portfolio/admin/bulk-status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkStatusUpdate {
    /// Projects to update
    pub ids: Vec<String>,
    /// Status applied to every listed project
    pub status: ProjectStatus,
}

impl BulkStatusUpdate {
    /// Create a bulk status update
    #[must_use]
    pub const fn new(ids: Vec<String>, status: ProjectStatus) -> Self {
        Self { ids, status }
    }
}

/// Query parameters for portfolio listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioQuery {
    /// Filter by category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Filter by status (admin listings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,

    /// Free-text search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// 1-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_payload;

    fn project() -> PortfolioProject {
        PortfolioProject {
            id: None,
            title: "Spice Route".to_string(),
            category: "E-commerce".to_string(),
            client: "Spice Route Foods".to_string(),
            tags: Some(vec!["React".to_string(), "Node".to_string()]),
            image: "/uploads/spice.webp".to_string(),
            slug: None,
            description: None,
            featured: Some(true),
            results: Some(vec!["+80% conversions".to_string()]),
            status: None,
            order: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn complete_project_is_valid() {
        assert!(validate_payload(&project()).is_ok());
    }

    #[test]
    fn project_requires_image() {
        let mut p = project();
        p.image = String::new();
        let err = validate_payload(&p).unwrap_err();
        assert!(err.to_string().contains("image"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let json = serde_json::to_value(project()).unwrap();
        assert!(json.get("slug").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["featured"], true);
    }

    #[test]
    fn reads_server_record() {
        let json = serde_json::json!({
            "_id": "p1",
            "title": "Spice Route",
            "category": "E-commerce",
            "client": "Spice Route Foods",
            "image": "/uploads/spice.webp",
            "slug": "spice-route",
            "status": "published"
        });
        let p: PortfolioProject = serde_json::from_value(json).unwrap();
        assert_eq!(p.id.as_deref(), Some("p1"));
        assert_eq!(p.tags, None);
        assert_eq!(p.status, Some(ProjectStatus::Published));
    }

    #[test]
    fn server_record_round_trips() {
        let json = serde_json::json!({
            "_id": "p1",
            "title": "Spice Route",
            "category": "E-commerce",
            "client": "Spice Route Foods",
            "image": "/uploads/spice.webp",
            "tags": [],
            "gallery": ["/uploads/a.webp", "/uploads/b.webp"],
            "testimonial": { "quote": "Great work", "author": "CEO" },
            "updatedAt": "2024-03-01T10:00:00.000Z"
        });
        let p: PortfolioProject = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(p.tags, Some(vec![]));
        assert_eq!(p.extra["testimonial"]["author"], "CEO");
        assert_eq!(serde_json::to_value(&p).unwrap(), json);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Published".parse::<ProjectStatus>(), Ok(ProjectStatus::Published));
        assert_eq!("draft".parse::<ProjectStatus>(), Ok(ProjectStatus::Draft));
        assert!("live".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn bulk_status_wire_shape() {
        let update = BulkStatusUpdate::new(
            vec!["a".to_string(), "b".to_string()],
            ProjectStatus::Archived,
        );
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ids": ["a", "b"], "status": "archived" })
        );
    }
}
