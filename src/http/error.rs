//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// JSON body of every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// `BAD_REQUEST`, `NOT_FOUND` or `INTERNAL_ERROR`
    pub code: String,
    pub message: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Unusable query input; the message is shown to the caller as is
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }

    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let message = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => msg,
        };
        let body = ApiError {
            code: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<crate::Error> for AppError {
    fn from(err: crate::Error) -> Self {
        let message = match &err {
            crate::Error::InvalidLatitude(_) => "Invalid latitude",
            crate::Error::InvalidLongitude(_) => "Invalid longitude",
            crate::Error::InvalidDateTime(_) => "Invalid date or time format",
            _ => return AppError::Internal(err.to_string()),
        };
        debug!(error = %err, "rejecting request");
        AppError::bad_request(message)
    }
}
