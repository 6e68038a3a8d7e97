//! API error taxonomy.
//!
//! Every non-2xx outcome collapses into one of these variants. The raw
//! backend payload travels with the auth and validation variants so the
//! display layer can run it through [`shopgrid_core::format::format_error`]
//! at the last moment.

use serde_json::Value;
use thiserror::Error;

use crate::transport::TransportError;
use shopgrid_core::format::{format_error, GENERIC_ERROR};

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 or 403. Outside the login flow this is the session teardown
    /// signal.
    #[error("authentication failed")]
    Unauthorized { payload: Option<Value> },

    /// 400 or 422: the backend rejected the request body. Carries the raw
    /// payload for field-level formatting.
    #[error("request rejected by the server")]
    Validation(Value),

    /// Any other non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// A 2xx response whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether this error must tear down the session (401/403 outside the
    /// login flow).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Human-readable message for display, built from the backend payload
    /// where one exists.
    pub fn formatted(&self) -> String {
        match self {
            ApiError::Unauthorized { payload: Some(p) } => format_error(p),
            ApiError::Unauthorized { payload: None } => GENERIC_ERROR.to_string(),
            ApiError::Validation(payload) => format_error(payload),
            ApiError::Status { .. } | ApiError::Network(_) | ApiError::Decode(_) => {
                GENERIC_ERROR.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_errors_format_field_lines() {
        let err = ApiError::Validation(json!({
            "username": ["This field is required."],
            "unit_price": "Must be a positive number."
        }));
        let text = err.formatted();
        assert!(text.contains("Username: This field is required."));
        assert!(text.contains("Unit Price: Must be a positive number."));
    }

    #[test]
    fn unauthorized_without_payload_falls_back_to_generic() {
        let err = ApiError::Unauthorized { payload: None };
        assert_eq!(err.formatted(), GENERIC_ERROR);
        assert!(err.is_auth_failure());
    }

    #[test]
    fn network_errors_never_leak_internals() {
        let err = ApiError::Network(TransportError("connection refused".to_string()));
        assert_eq!(err.formatted(), GENERIC_ERROR);
        assert!(!err.is_auth_failure());
    }
}
