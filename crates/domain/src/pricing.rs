//! Pricing plans

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// A pricing plan as edited in the admin panel and listed on the pricing page
///
/// Fields the client does not model (timestamps, server bookkeeping) are kept
/// in `extra`, so a plan read from the server is re-submitted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    /// Server-assigned identifier (absent when creating)
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Plan name, e.g. "Growth"
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    /// Display price, e.g. "₹49,999" or "Custom"
    #[validate(length(min = 1, message = "is required"))]
    pub price: String,

    /// Short description shown under the name
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,

    /// Feature bullet list, in display order
    #[serde(default)]
    #[validate(length(min = 1, message = "must list at least one feature"))]
    pub features: Vec<String>,

    /// Highlighted as the popular plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,

    /// Call-to-action button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,

    /// Sort position on the pricing page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Soft-delete flag maintained by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Fields not modelled above, passed through as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Button label the admin form starts new plans with
pub const DEFAULT_CTA_TEXT: &str = "Get Started";

impl PricingPlan {
    /// Create a plan with the required display fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            price: price.into(),
            description: description.into(),
            features,
            is_popular: Some(false),
            cta_text: Some(DEFAULT_CTA_TEXT.to_string()),
            order: None,
            is_active: None,
            extra: Map::new(),
        }
    }
}

/// One entry of a reorder request: which record goes to which position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    /// Record identifier
    pub id: String,
    /// New sort position
    pub order: u32,
}

impl ReorderItem {
    /// Create a reorder entry
    #[must_use]
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            order,
        }
    }

    /// Build entries assigning positions in the given id order
    #[must_use]
    pub fn sequence<S: AsRef<str>>(ids: &[S]) -> Vec<Self> {
        ids.iter()
            .zip(0u32..)
            .map(|(id, order)| Self::new(id.as_ref(), order))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_payload;

    #[test]
    fn new_plan_has_defaults() {
        let plan = PricingPlan::new("Starter", "₹9,999", "For small sites", vec![
            "5 pages".to_string(),
        ]);
        assert_eq!(plan.cta_text.as_deref(), Some(DEFAULT_CTA_TEXT));
        assert_eq!(plan.is_popular, Some(false));
        assert_eq!(plan.order, None);
        assert!(validate_payload(&plan).is_ok());
    }

    #[test]
    fn plan_requires_features() {
        let plan = PricingPlan::new("Starter", "₹9,999", "For small sites", vec![]);
        let err = validate_payload(&plan).unwrap_err();
        assert!(err.to_string().contains("features"));
    }

    #[test]
    fn plan_reads_server_shape() {
        let json = serde_json::json!({
            "_id": "65f0",
            "name": "Growth",
            "price": "₹49,999",
            "description": "Scale up",
            "features": ["SEO", "Blog"],
            "isPopular": true,
            "ctaText": "Talk to us",
            "order": 2,
            "isActive": true
        });
        let plan: PricingPlan = serde_json::from_value(json).unwrap();
        assert_eq!(plan.id.as_deref(), Some("65f0"));
        assert_eq!(plan.is_popular, Some(true));
        assert_eq!(plan.features, vec!["SEO", "Blog"]);
        assert_eq!(plan.is_active, Some(true));
    }

    #[test]
    fn plan_writes_camel_case_without_id() {
        let plan = PricingPlan::new("Starter", "₹9,999", "Small", vec!["x".to_string()]);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["ctaText"], "Get Started");
        assert_eq!(json["isPopular"], false);
        assert!(json.get("_id").is_none());
        assert!(json.get("id").is_none());
        assert!(json.get("isActive").is_none());
    }

    #[test]
    fn plan_resubmits_server_record_unchanged() {
        let json = serde_json::json!({
            "_id": "65f0",
            "name": "Growth",
            "price": "₹49,999",
            "description": "Scale up",
            "features": ["SEO"],
            "billingPeriod": "month",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "__v": 0
        });
        let plan: PricingPlan = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(plan.extra["billingPeriod"], "month");
        assert_eq!(serde_json::to_value(&plan).unwrap(), json);
    }

    #[test]
    fn plan_accepts_plain_id() {
        let plan: PricingPlan = serde_json::from_value(serde_json::json!({
            "id": "65f0", "name": "A", "price": "1", "description": "d", "features": ["x"]
        }))
        .unwrap();
        assert_eq!(plan.id.as_deref(), Some("65f0"));
    }

    #[test]
    fn reorder_sequence_assigns_positions() {
        let items = ReorderItem::sequence(&["b", "a", "c"]);
        assert_eq!(items, vec![
            ReorderItem::new("b", 0),
            ReorderItem::new("a", 1),
            ReorderItem::new("c", 2),
        ]);
    }

    #[test]
    fn reorder_item_wire_shape() {
        let json = serde_json::to_value(ReorderItem::new("1", 0)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "1", "order": 0 }));
    }
}
