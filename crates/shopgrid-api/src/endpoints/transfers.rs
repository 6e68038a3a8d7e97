//! Transfer endpoints.
//!
//! Workflow transitions (approve, reject, complete) are backend-owned
//! actions; the client posts to the action path and re-renders whatever
//! comes back. It never mutates a transfer's status locally.

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::types::{NewTransfer, Transfer, TransferStatus};

/// Query filters for transfer listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferFilter {
    pub status: Option<TransferStatus>,
    pub from_shop_id: Option<i64>,
    pub to_shop_id: Option<i64>,
}

impl TransferFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(id) = self.from_shop_id {
            query.push(("from_shop_id", id.to_string()));
        }
        if let Some(id) = self.to_shop_id {
            query.push(("to_shop_id", id.to_string()));
        }
        query
    }
}

pub struct Transfers<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Transfers<'_> {
    pub async fn list(&self, filter: &TransferFilter) -> ApiResult<Vec<Transfer>> {
        self.client.get("/transfers/", &filter.to_query()).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Transfer> {
        self.client.get(&format!("/transfers/{id}/"), &[]).await
    }

    pub async fn create(&self, payload: &NewTransfer) -> ApiResult<Transfer> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.post("/transfers/", body).await
    }

    pub async fn approve(&self, id: i64) -> ApiResult<Transfer> {
        self.client.post_empty(&format!("/transfers/{id}/approve/")).await
    }

    pub async fn reject(&self, id: i64) -> ApiResult<Transfer> {
        self.client.post_empty(&format!("/transfers/{id}/reject/")).await
    }

    pub async fn complete(&self, id: i64) -> ApiResult<Transfer> {
        self.client.post_empty(&format!("/transfers/{id}/complete/")).await
    }
}
