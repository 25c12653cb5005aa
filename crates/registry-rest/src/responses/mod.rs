//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry_core::{ErrorResponse, FieldError, RegistryError};
use serde::Serialize;

/// Application error type for Axum.
///
/// Carries the HTTP status chosen by the handler together with the
/// `{"error": ...}` body.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl AppError {
    /// Creates an error with a plain message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(message),
        }
    }

    /// 400 with a plain message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 400 carrying field-level validation details.
    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(message).with_details(details),
        }
    }

    /// 404 with a plain message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 echoing the error text.
    pub fn internal(err: &RegistryError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = AppError::not_found("user not found");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.error, "user not found");
        assert!(err.body.details.is_none());
    }

    #[test]
    fn test_internal_echoes_error_text() {
        let err = AppError::internal(&RegistryError::Database("down".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error, "Database error: down");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request("invalid user ID").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
