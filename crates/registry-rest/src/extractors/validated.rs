//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes the body and validates it with the
//! `validator` crate. Both failure kinds answer 400: an undecodable body
//! with `{"error":"invalid request"}`, a field violation with the
//! summarized message plus field-level `details`.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use registry_core::{field_errors, summarize};
use serde::de::DeserializeOwned;
use tracing::{error, warn};
use validator::{Validate, ValidationErrors};

/// Message returned for any body that cannot be decoded.
pub const INVALID_REQUEST: &str = "invalid request";

/// JSON extractor that automatically validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use registry_rest::extractors::ValidatedJson;
/// use registry_service::CreateUserRequest;
///
/// async fn create_user(ValidatedJson(request): ValidatedJson<CreateUserRequest>) {
///     // request is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// JSON parsing/deserialization error.
    JsonError(JsonRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                error!("Failed to parse request body: {}", rejection.body_text());
                AppError::bad_request(INVALID_REQUEST).into_response()
            }
            Self::ValidationError(errors) => {
                let details = field_errors(&errors);
                let message = summarize(&details);
                warn!("Validation failed: {}", message);
                AppError::validation(message, details).into_response()
            }
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
