//! Console error type: everything the command layer can fail with,
//! flattened into one display-ready message at the top of `main`.

use thiserror::Error;

use shopgrid_api::ApiError;
use shopgrid_core::error::{CoreError, ValidationError};
use shopgrid_session::SessionError;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Please log in first.")]
    NotLoggedIn,

    #[error("{0}")]
    NotPermitted(String),

    /// Malformed operator input (bad id, unparseable amount, ...).
    #[error("{0}")]
    Input(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// The message shown to the operator. API failures go through the shared
    /// formatter so field errors read the same everywhere.
    pub fn display_message(&self) -> String {
        match self {
            ConsoleError::Api(e) => e.formatted(),
            ConsoleError::Session(SessionError::Api(e)) => e.formatted(),
            other => other.to_string(),
        }
    }
}
