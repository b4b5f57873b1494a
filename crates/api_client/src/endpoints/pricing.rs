//! `/pricing` endpoints

use domain::{PricingPlan, ReorderItem};
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, encode_segment};
use crate::error::ApiError;

#[derive(Serialize)]
struct ReorderPlans<'a> {
    plans: &'a [ReorderItem],
}

/// Pricing plan endpoints: the public list plus admin CRUD
#[derive(Debug, Clone, Copy)]
pub struct PricingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PricingApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /pricing`: active plans in display order
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_plans(self) -> Result<Value, ApiError> {
        self.client.get("/pricing").await
    }

    /// `GET /pricing/admin/all`: every plan, including soft-deleted ones
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_all_plans(self) -> Result<Value, ApiError> {
        self.client.get("/pricing/admin/all").await
    }

    /// `GET /pricing/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_plan(self, id: &str) -> Result<Value, ApiError> {
        self.client.get(&plan_path(id)?).await
    }

    /// `POST /pricing/admin`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create_plan(self, plan: &PricingPlan) -> Result<Value, ApiError> {
        self.client.post("/pricing/admin", plan).await
    }

    /// `PUT /pricing/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update_plan(self, id: &str, plan: &PricingPlan) -> Result<Value, ApiError> {
        self.client.put(&plan_path(id)?, plan).await
    }

    /// `DELETE /pricing/admin/{id}`: soft delete
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete_plan(self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&plan_path(id)?).await
    }

    /// `PATCH /pricing/admin/{id}/restore`: undo a soft delete
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn restore_plan(self, id: &str) -> Result<Value, ApiError> {
        self.client
            .patch_empty(&format!("{}/restore", plan_path(id)?))
            .await
    }

    /// `DELETE /pricing/admin/{id}/permanent`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn permanently_delete_plan(self, id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("{}/permanent", plan_path(id)?))
            .await
    }

    /// `PATCH /pricing/admin/{id}/toggle-popular`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn toggle_popular(self, id: &str) -> Result<Value, ApiError> {
        self.client
            .patch_empty(&format!("{}/toggle-popular", plan_path(id)?))
            .await
    }

    /// `PATCH /pricing/admin/reorder` with body `{ "plans": [...] }`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn reorder_plans(self, plans: &[ReorderItem]) -> Result<Value, ApiError> {
        self.client
            .patch("/pricing/admin/reorder", &ReorderPlans { plans })
            .await
    }
}

fn plan_path(id: &str) -> Result<String, ApiError> {
    Ok(format!("/pricing/admin/{}", encode_segment(id)?))
}
