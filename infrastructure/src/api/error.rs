//! Error types for the storefront API adapter

use kababhut_application::RemoteError;
use thiserror::Error;

/// Errors that can occur when talking to the storefront REST API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Could not reach {url}: {message}")]
    Connection { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    /// Non-2xx response; `message` is the body text or the status reason
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },
}

impl ApiError {
    pub(crate) fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}

impl From<ApiError> for RemoteError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Timeout => RemoteError::Timeout,
            ApiError::Connection { url, message } => {
                RemoteError::Connection(format!("{}: {}", url, message))
            }
            ApiError::Status { status, message } => RemoteError::Status { status, message },
            ApiError::Parse { error, .. } => RemoteError::Decode(error),
            ApiError::Client(message) => RemoteError::Other(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_remote_error() {
        let status = ApiError::Status {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(RemoteError::from(status).is_unauthorized());

        let parse = ApiError::Parse {
            error: "expected value".into(),
            raw: "<html>".into(),
        };
        assert_eq!(
            RemoteError::from(parse),
            RemoteError::Decode("expected value".into())
        );
        assert_eq!(RemoteError::from(ApiError::Timeout), RemoteError::Timeout);
    }
}
