//! Sales endpoints. Sales are append-only: create and read, no update or
//! delete.

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::types::{NewSale, PaymentMethod, Sale};

/// Query filters for sale listings. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    pub shop_id: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SaleFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(id) = self.shop_id {
            query.push(("shop_id", id.to_string()));
        }
        if let Some(method) = self.payment_method {
            query.push(("payment_method", method.to_string()));
        }
        if let Some(date) = &self.start_date {
            query.push(("start_date", date.clone()));
        }
        if let Some(date) = &self.end_date {
            query.push(("end_date", date.clone()));
        }
        query
    }
}

pub struct Sales<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Sales<'_> {
    pub async fn list(&self, filter: &SaleFilter) -> ApiResult<Vec<Sale>> {
        self.client.get("/sales/", &filter.to_query()).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Sale> {
        self.client.get(&format!("/sales/{id}/"), &[]).await
    }

    pub async fn create(&self, payload: &NewSale) -> ApiResult<Sale> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        self.client.post("/sales/", body).await
    }
}
