//! Authentication endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiResult;
use shopgrid_core::types::User;

/// Login or registration outcome: the principal plus the token pair.
///
/// The refresh token is persisted alongside the access token but never
/// exchanged; expiry surfaces as a 401 and tears the session down.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop: Option<i64>,
}

pub struct Auth<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Auth<'_> {
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.client
            .post("/auth/login/", json!({
                "username": request.username,
                "password": request.password,
            }))
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let body = serde_json::to_value(request).map_err(crate::error::ApiError::Decode)?;
        self.client.post("/auth/register/", body).await
    }

    /// Fetches the principal behind the current token. A 401 here is the
    /// definitive "session is dead" answer during restore.
    pub async fn profile(&self) -> ApiResult<User> {
        self.client.get("/auth/profile/", &[]).await
    }
}
