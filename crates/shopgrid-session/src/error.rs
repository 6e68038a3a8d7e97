//! Session error types.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Credentials rejected at login. Carries the backend's message when it
    /// sent one.
    #[error("{message}")]
    LoginFailed { message: String },

    /// Registration rejected. The message is already formatted for display.
    #[error("{message}")]
    RegistrationFailed { message: String },

    /// An operation that needs a principal ran without one.
    #[error("not logged in")]
    NotLoggedIn,

    /// Durable session file could not be read or written.
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Durable session file exists but does not parse.
    #[error("corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// An API call failed for a reason other than authentication.
    #[error(transparent)]
    Api(#[from] shopgrid_api::ApiError),
}
