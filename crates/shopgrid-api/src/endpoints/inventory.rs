//! Stock-level endpoints (`/inventory/stock/`).

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::types::Stock;

/// Query filters for stock listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockFilter {
    pub shop_id: Option<i64>,
    pub product_id: Option<i64>,
    /// Only records the backend flags as below their threshold.
    pub low_stock: Option<bool>,
}

impl StockFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(id) = self.shop_id {
            query.push(("shop_id", id.to_string()));
        }
        if let Some(id) = self.product_id {
            query.push(("product_id", id.to_string()));
        }
        if let Some(low) = self.low_stock {
            query.push(("low_stock", low.to_string()));
        }
        query
    }
}

/// Payload for creating a stock record.
#[derive(Debug, Clone, Serialize)]
pub struct NewStock {
    pub shop: i64,
    pub product: i64,
    pub quantity: i64,
    pub min_threshold: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i64>,
}

/// Partial stock update. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i64>,
}

pub struct Inventory<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Inventory<'_> {
    pub async fn list(&self, filter: &StockFilter) -> ApiResult<Vec<Stock>> {
        self.client.get("/inventory/stock/", &filter.to_query()).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Stock> {
        self.client.get(&format!("/inventory/stock/{id}/"), &[]).await
    }

    pub async fn create(&self, payload: &NewStock) -> ApiResult<Stock> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.post("/inventory/stock/", body).await
    }

    pub async fn update(&self, id: i64, update: &StockUpdate) -> ApiResult<Stock> {
        let body = serde_json::to_value(update).map_err(ApiError::Decode)?;
        self.client.put(&format!("/inventory/stock/{id}/"), body).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/inventory/stock/{id}/")).await
    }
}
