//! CMS content sections

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// An editable block of site copy (hero, about, testimonials, ...)
///
/// `content` is free-form JSON whose shape is described by the section's
/// schema endpoint; the client passes it through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    /// Section key used in the URL, e.g. "hero"
    #[validate(length(min = 1, message = "is required"))]
    pub section: String,

    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Section body
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,

    /// Whether the public site shows this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    /// Fields not modelled above, passed through as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentSection {
    /// Create a section with the given key and body
    #[must_use]
    pub fn new(section: impl Into<String>, content: Value) -> Self {
        Self {
            section: section.into(),
            title: None,
            content,
            is_published: None,
            extra: Map::new(),
        }
    }
}
