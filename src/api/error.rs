use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::EventError;

/// Detail returned when `query` is missing or empty.
pub const QUERY_REQUIRED: &str = "Query parameter is required";

/// Detail returned when the completion text is not JSON.
pub const PARSE_FAILED: &str = "Failed to parse historical event data";

/// API-layer error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 400 - Bad request (invalid input)
    #[error("{0}")]
    BadRequest(String),

    /// 500 - Internal error
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

// Upstream failures surface with their message intact.
impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
