//! # HTTP Transport
//!
//! A thin, object-safe abstraction over the HTTP stack so the whole client
//! can run against canned responses in tests. Production uses
//! [`ReqwestTransport`]; tests use [`StubTransport`].

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// HTTP methods used by the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A fully prepared request: absolute URL, optional bearer token, optional
/// JSON body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Raw response: status code plus body text. Decoding into typed values
/// happens in the client, where the status is known.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Parses the body as an arbitrary JSON value, if it is JSON at all.
    pub fn json_value(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

/// The seam between the typed client and the HTTP stack.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// =============================================================================
// Production Transport
// =============================================================================

/// reqwest-backed transport used outside of tests.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);
        if let Some(token) = &req.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =============================================================================
// Stub Transport (for tests)
// =============================================================================

/// Canned-response transport for tests.
///
/// Responses are consumed in FIFO order; every sent request is recorded so
/// assertions can inspect URLs, bearer tokens, and bodies. Running out of
/// canned responses is reported as a transport error.
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        StubTransport::default()
    }

    /// Queues a response with the given status and JSON body.
    pub fn push(&self, status: u16, body: Value) {
        self.responses.lock().expect("stub poisoned").push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    /// Queues a response with a non-JSON body.
    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.lock().expect("stub poisoned").push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("stub poisoned").clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().expect("stub poisoned").last().cloned()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().expect("stub poisoned").push(req);
        self.responses
            .lock()
            .expect("stub poisoned")
            .pop_front()
            .ok_or_else(|| TransportError("no stubbed response queued".to_string()))
    }
}
