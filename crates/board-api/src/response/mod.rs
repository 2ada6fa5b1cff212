//! Response types and error handling for API endpoints
//!
//! The wire contract reports every client-facing failure as an HTTP 200
//! body of the form `{"errors": {code: message}}` so callers handle one
//! shape for validation errors, missing rows, and request-format problems
//! alike. Only internal failures surface as 500.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use board_core::validation::ValidationErrors;
use board_core::DomainError;
use board_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Unsupported content type")]
    InvalidContentType,

    #[error("Malformed request body")]
    MalformedBody,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// Body shape shared by every client-facing failure
#[derive(Debug, Serialize)]
struct ErrorBody {
    errors: ValidationErrors,
}

fn client_error(errors: ValidationErrors) -> Response {
    (StatusCode::OK, Json(ErrorBody { errors })).into_response()
}

fn single_error(code: &str, message: &str) -> Response {
    let mut errors = ValidationErrors::new();
    errors.insert(code, message);
    client_error(errors)
}

fn internal_error() -> Response {
    let mut errors = ValidationErrors::new();
    errors.insert("internal_error", "internal server error");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { errors })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Service(ServiceError::Validation(errors)) => client_error(errors),
            Self::Service(ServiceError::Domain(e)) => match e {
                DomainError::DatabaseError(_) => {
                    error!(error = %e, "Database error");
                    internal_error()
                }
                other => single_error(other.code(), other.message()),
            },
            Self::InvalidContentType => single_error(
                "invalid_content_type",
                "The content type should be application/json",
            ),
            Self::MalformedBody => single_error("invalid_json_format", "json format is invalid"),
            Self::Service(ServiceError::Internal(e)) | Self::Internal(e) => {
                error!(error = ?e, "Internal error");
                internal_error()
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// PNG response with the image content type
pub struct Png(pub Vec<u8>);

impl IntoResponse for Png {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "image/png")], self.0).into_response()
    }
}

/// Successful deletion: 200 with an empty body
pub struct Deleted;

impl IntoResponse for Deleted {
    fn into_response(self) -> Response {
        StatusCode::OK.into_response()
    }
}
