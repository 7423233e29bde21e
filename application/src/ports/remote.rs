//! Errors shared by every remote collaborator port

use thiserror::Error;

/// Errors that can occur while talking to the storefront API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl RemoteError {
    /// Whether the server rejected the caller's credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RemoteError::Status { status: 401 | 403, .. })
    }
}
