//! Category CRUD endpoints. Nested under the products app on the backend.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::types::Category;

/// Create/update payload for a category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct Categories<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Categories<'_> {
    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        self.client.get("/products/categories/", &[]).await
    }

    pub async fn create(&self, payload: &CategoryPayload) -> ApiResult<Category> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.post("/products/categories/", body).await
    }

    pub async fn update(&self, id: i64, payload: &CategoryPayload) -> ApiResult<Category> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client
            .put(&format!("/products/categories/{id}/"), body)
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .delete(&format!("/products/categories/{id}/"))
            .await
    }
}
