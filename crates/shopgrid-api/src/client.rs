//! The API client: URL assembly, bearer auth, status mapping.
//!
//! One `ApiClient` is shared across the whole application. Endpoint groups
//! hang off accessor methods (`client.products()`, `client.alerts()`, ...),
//! each returning a borrowed handle with the typed calls for one backend
//! app.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::{
    Alerts, Auth, Categories, Inventory, Products, Sales, Shops, Transfers, Users,
};
use crate::error::{ApiError, ApiResult};
use crate::transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

/// Typed REST client for the ShopGrid backend.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client against the given base URL using the production
    /// transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client over an explicit transport. Tests pass a
    /// [`crate::transport::StubTransport`] here.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = base_url.into();
        ApiClient {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Installs the access token attached to subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    /// Removes the access token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// The currently installed access token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    // =========================================================================
    // Endpoint Accessors
    // =========================================================================

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn shops(&self) -> Shops<'_> {
        Shops { client: self }
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn inventory(&self) -> Inventory<'_> {
        Inventory { client: self }
    }

    pub fn sales(&self) -> Sales<'_> {
        Sales { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    pub fn alerts(&self) -> Alerts<'_> {
        Alerts { client: self }
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
    ) -> ApiResult<HttpResponse> {
        let url = self.url(path, query);
        debug!(method = method.as_str(), %url, "api request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                bearer: self.token(),
                body,
            })
            .await?;

        debug!(status = response.status, "api response");

        if response.is_success() {
            return Ok(response);
        }
        match response.status {
            401 | 403 => Err(ApiError::Unauthorized {
                payload: response.json_value(),
            }),
            400 | 422 => Err(ApiError::Validation(
                response
                    .json_value()
                    .unwrap_or_else(|| Value::String(response.body.clone())),
            )),
            status => Err(ApiError::Status {
                status,
                body: response.body,
            }),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ApiResult<T> {
        let response = self.send(HttpMethod::Get, path, query, None).await?;
        Ok(response.json()?)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> ApiResult<T> {
        let response = self.send(HttpMethod::Post, path, &[], Some(body)).await?;
        Ok(response.json()?)
    }

    /// POST with no request body, for action endpoints like
    /// `/transfers/:id/approve/`.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(HttpMethod::Post, path, &[], None).await?;
        Ok(response.json()?)
    }

    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> ApiResult<T> {
        let response = self.send(HttpMethod::Put, path, &[], Some(body)).await?;
        Ok(response.json()?)
    }

    /// PUT with no request body, for action endpoints like
    /// `/alerts/:id/read/`.
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(HttpMethod::Put, path, &[], None).await?;
        Ok(response.json()?)
    }

    /// PUT whose response body the caller ignores.
    pub(crate) async fn put_unit(&self, path: &str) -> ApiResult<()> {
        self.send(HttpMethod::Put, path, &[], None).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(HttpMethod::Delete, path, &[], None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::StubTransport;
    use serde_json::json;

    fn client_with_stub() -> (ApiClient, Arc<StubTransport>) {
        let stub = Arc::new(StubTransport::new());
        let client = ApiClient::with_transport("http://test.local/api/", stub.clone());
        (client, stub)
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_set() {
        let (client, stub) = client_with_stub();
        stub.push(200, json!([]));

        client.set_token("tok-123");
        let _: Vec<Value> = client.get("/shops/", &[]).await.unwrap();

        let req = stub.last_request().unwrap();
        assert_eq!(req.bearer.as_deref(), Some("tok-123"));
        assert_eq!(req.url, "http://test.local/api/shops/");
    }

    #[tokio::test]
    async fn clear_token_strips_auth() {
        let (client, stub) = client_with_stub();
        stub.push(200, json!([]));

        client.set_token("tok-123");
        client.clear_token();
        let _: Vec<Value> = client.get("/shops/", &[]).await.unwrap();

        assert_eq!(stub.last_request().unwrap().bearer, None);
    }

    #[tokio::test]
    async fn query_pairs_join_into_the_url() {
        let (client, stub) = client_with_stub();
        stub.push(200, json!([]));

        let query = vec![
            ("is_read", "false".to_string()),
            ("shop_id", "2".to_string()),
        ];
        let _: Vec<Value> = client.get("/alerts/", &query).await.unwrap();

        assert_eq!(
            stub.last_request().unwrap().url,
            "http://test.local/api/alerts/?is_read=false&shop_id=2"
        );
    }

    #[tokio::test]
    async fn unauthorized_maps_with_payload() {
        let (client, stub) = client_with_stub();
        stub.push(401, json!({"error": "Invalid credentials"}));

        let err = client.get::<Value>("/auth/profile/", &[]).await.unwrap_err();
        match err {
            ApiError::Unauthorized { payload: Some(p) } => {
                assert_eq!(p["error"], "Invalid credentials");
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_request_preserves_the_raw_payload() {
        let (client, stub) = client_with_stub();
        stub.push(400, json!({"quantity": ["Ensure this value is greater than or equal to 1."]}));

        let err = client
            .post::<Value>("/sales/", json!({"quantity": 0}))
            .await
            .unwrap_err();
        match err {
            ApiError::Validation(payload) => {
                assert!(payload["quantity"].is_array());
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_errors_carry_the_status() {
        let (client, stub) = client_with_stub();
        stub.push_raw(500, "internal error");

        let err = client.get::<Value>("/shops/", &[]).await.unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Status, got {other:?}"),
        }
    }
}
