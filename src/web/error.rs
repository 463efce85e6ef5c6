//! Web Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Io(_) | WebError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(status = status.as_u16(), error = %self, "Dashboard request failed");
        (status, self.to_string()).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
