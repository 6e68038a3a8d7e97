//! Shop CRUD endpoints.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::types::Shop;

/// Create/update payload for a shop.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShopPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub struct Shops<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Shops<'_> {
    pub async fn list(&self) -> ApiResult<Vec<Shop>> {
        self.client.get("/shops/", &[]).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Shop> {
        self.client.get(&format!("/shops/{id}/"), &[]).await
    }

    pub async fn create(&self, payload: &ShopPayload) -> ApiResult<Shop> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.post("/shops/", body).await
    }

    pub async fn update(&self, id: i64, payload: &ShopPayload) -> ApiResult<Shop> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.put(&format!("/shops/{id}/"), body).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/shops/{id}/")).await
    }
}
