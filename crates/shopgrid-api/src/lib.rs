//! # shopgrid-api: REST Client for the ShopGrid Backend
//!
//! The single gateway between the client and the backend's REST API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                    │
//! │                                                                         │
//! │  client.products().list(&filter)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::get("/products/", [("is_active", "true")])                  │
//! │       │   • joins base URL + path + query                               │
//! │       │   • attaches "Authorization: Bearer <token>" when present       │
//! │       ▼                                                                 │
//! │  dyn HttpTransport ──► ReqwestTransport (production)                    │
//! │       │                StubTransport    (tests)                         │
//! │       ▼                                                                 │
//! │  status mapping:                                                        │
//! │    2xx       → decode JSON into the typed response                      │
//! │    401/403   → ApiError::Unauthorized (session teardown signal)         │
//! │    400/422   → ApiError::Validation (raw payload, formatted at display) │
//! │    other     → ApiError::Status                                         │
//! │                                                                         │
//! │  NO RETRIES: a failed request surfaces once and is not repeated.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, StubTransport,
};
