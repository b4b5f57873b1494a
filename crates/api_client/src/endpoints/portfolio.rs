//! `/portfolio` endpoints

use domain::{BulkStatusUpdate, PortfolioProject, PortfolioQuery, ReorderItem};
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, encode_segment};
use crate::error::ApiError;

#[derive(Serialize)]
struct ReorderProjects<'a> {
    projects: &'a [ReorderItem],
}

/// Portfolio endpoints: public listings plus admin CRUD
#[derive(Debug, Clone, Copy)]
pub struct PortfolioApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PortfolioApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /portfolio`: published projects
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_projects(self, query: &PortfolioQuery) -> Result<Value, ApiError> {
        self.client.get_with_query("/portfolio", query).await
    }

    /// `GET /portfolio/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_project(self, id: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/portfolio/{}", encode_segment(id)?))
            .await
    }

    /// `GET /portfolio/slug/{slug}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_by_slug(self, slug: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/portfolio/slug/{}", encode_segment(slug)?))
            .await
    }

    /// `GET /portfolio/featured`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_featured(self) -> Result<Value, ApiError> {
        self.client.get("/portfolio/featured").await
    }

    /// `GET /portfolio/categories`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_categories(self) -> Result<Value, ApiError> {
        self.client.get("/portfolio/categories").await
    }

    /// `GET /portfolio/admin/all`: every project regardless of status
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn get_all_projects(self, query: &PortfolioQuery) -> Result<Value, ApiError> {
        self.client
            .get_with_query("/portfolio/admin/all", query)
            .await
    }

    /// `POST /portfolio/admin`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn create_project(self, project: &PortfolioProject) -> Result<Value, ApiError> {
        self.client.post("/portfolio/admin", project).await
    }

    /// `PUT /portfolio/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn update_project(
        self,
        id: &str,
        project: &PortfolioProject,
    ) -> Result<Value, ApiError> {
        self.client.put(&admin_path(id)?, project).await
    }

    /// `DELETE /portfolio/admin/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn delete_project(self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&admin_path(id)?).await
    }

    /// `PATCH /portfolio/admin/bulk-status` with body `{ "ids": [...], "status": ... }`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn bulk_update_status(self, update: &BulkStatusUpdate) -> Result<Value, ApiError> {
        self.client
            .patch("/portfolio/admin/bulk-status", update)
            .await
    }

    /// `PATCH /portfolio/admin/reorder` with body `{ "projects": [...] }`
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn reorder_projects(self, projects: &[ReorderItem]) -> Result<Value, ApiError> {
        self.client
            .patch("/portfolio/admin/reorder", &ReorderProjects { projects })
            .await
    }
}

fn admin_path(id: &str) -> Result<String, ApiError> {
    Ok(format!("/portfolio/admin/{}", encode_segment(id)?))
}
