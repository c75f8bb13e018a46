//! Error types for the resource API
//!
//! Every failure is rendered as a JSON body of the form
//! `{"error": <category>, "message": <detail>}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Unified error type for the resource API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or missing body fields
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Path identifier is not a positive integer
    #[error("Invalid ID: Resource ID must be a positive integer")]
    InvalidId,

    /// Unsupported query parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Well-formed id with no matching record; holds the id as written
    #[error("Not found: Resource with ID {0} not found")]
    NotFound(String),

    /// Unexpected fault inside a handler
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Not-found error for the given id.
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        ApiError::NotFound(id.to_string())
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidId | ApiError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category string placed in the `error` field.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation failed",
            ApiError::InvalidId => "Invalid ID",
            ApiError::InvalidParameter(_) => "Invalid parameter",
            ApiError::NotFound(_) => "Not found",
            ApiError::Internal(_) => "Internal server error",
        }
    }

    /// Detail string placed in the `message` field.
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg)
            | ApiError::InvalidParameter(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::InvalidId => "Resource ID must be a positive integer".to_string(),
            ApiError::NotFound(id) => format!("Resource with ID {} not found", id),
        }
    }
}

// == Rejection Conversions ==
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!(
            "Request body must be valid JSON: {}",
            rejection.body_text()
        ))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::InvalidId
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidParameter(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }

        let body = Json(ErrorResponse::new(self.category(), self.message()));
        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the resource API.
pub type Result<T> = std::result::Result<T, ApiError>;
