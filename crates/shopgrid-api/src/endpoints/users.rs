//! User administration endpoints (`/auth/users/`). Admin-only server-side.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use shopgrid_core::types::{Role, User};

/// Partial update of a managed user. `None` fields are omitted from the
/// request body and left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub struct Users<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Users<'_> {
    pub async fn list(&self) -> ApiResult<Vec<User>> {
        self.client.get("/auth/users/", &[]).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<User> {
        self.client.get(&format!("/auth/users/{id}/"), &[]).await
    }

    pub async fn update(&self, id: i64, update: &UserUpdate) -> ApiResult<User> {
        let body = serde_json::to_value(update).map_err(ApiError::Decode)?;
        self.client.put(&format!("/auth/users/{id}/"), body).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/auth/users/{id}/")).await
    }
}
