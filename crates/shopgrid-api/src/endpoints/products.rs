//! Product catalog endpoints.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::money::Money;
use shopgrid_core::types::Product;

/// Query filters for product listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub is_active: Option<bool>,
}

impl ProductFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(id) = self.category_id {
            query.push(("category_id", id.to_string()));
        }
        if let Some(active) = self.is_active {
            query.push(("is_active", active.to_string()));
        }
        query
    }
}

/// Create/update payload for a product. Prices travel as decimal strings.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    pub unit_price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub struct Products<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Products<'_> {
    pub async fn list(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>> {
        self.client.get("/products/", &filter.to_query()).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.client.get(&format!("/products/{id}/"), &[]).await
    }

    pub async fn create(&self, payload: &ProductPayload) -> ApiResult<Product> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.post("/products/", body).await
    }

    pub async fn update(&self, id: i64, payload: &ProductPayload) -> ApiResult<Product> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.put(&format!("/products/{id}/"), body).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/products/{id}/")).await
    }
}
