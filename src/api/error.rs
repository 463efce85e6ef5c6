//! API Client Error Types

use thiserror::Error;

/// Message used when the server gives no usable `detail`
pub const GENERIC_FAILURE: &str = "Request failed";

/// Errors raised by a single API call
#[derive(Error, Debug)]
pub enum RequestError {
    /// Server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection, TLS or body transfer failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the JSON we expected
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// User-facing message for this failure
    pub fn message(&self) -> String {
        match self {
            RequestError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Api { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            RequestError::Decode(_) => None,
        }
    }
}

/// Result type for API calls
pub type RequestResult<T> = Result<T, RequestError>;
