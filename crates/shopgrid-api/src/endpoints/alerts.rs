//! Alert endpoints. The poller drives `list` with `is_read=false`; the
//! alerts page uses the full filter set.

use crate::client::ApiClient;
use crate::error::ApiResult;
use shopgrid_core::types::{Alert, AlertSeverity, AlertType};

/// Query filters for alert listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertFilter {
    pub is_read: Option<bool>,
    pub shop_id: Option<i64>,
    pub alert_type: Option<AlertType>,
    pub severity: Option<AlertSeverity>,
}

impl AlertFilter {
    /// The filter the background poller uses on every tick.
    pub fn unread() -> Self {
        AlertFilter {
            is_read: Some(false),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(read) = self.is_read {
            query.push(("is_read", read.to_string()));
        }
        if let Some(id) = self.shop_id {
            query.push(("shop_id", id.to_string()));
        }
        if let Some(kind) = self.alert_type {
            query.push(("alert_type", kind.as_str().to_string()));
        }
        if let Some(severity) = self.severity {
            query.push(("severity", severity.to_string()));
        }
        query
    }
}

pub struct Alerts<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Alerts<'_> {
    pub async fn list(&self, filter: &AlertFilter) -> ApiResult<Vec<Alert>> {
        self.client.get("/alerts/", &filter.to_query()).await
    }

    pub async fn mark_read(&self, id: i64) -> ApiResult<Alert> {
        self.client.put_empty(&format!("/alerts/{id}/read/")).await
    }

    pub async fn mark_all_read(&self) -> ApiResult<()> {
        self.client.put_unit("/alerts/mark-all-read/").await
    }
}
