//! Error taxonomy for the whole API.
//!
//! Handlers map the failures they know about to 400s with the shapes the
//! frontend expects; everything else funnels into a logged, non-descriptive
//! 500 so no internal detail leaks to the client.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Per-field schema violations, keyed by field name.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// A write refused because an equivalent record already exists.
    #[error("{0}")]
    Conflict(&'static str),

    #[error("invalid username or password")]
    InvalidCredentials,

    /// A row that was expected to exist did not. Surfaced to the client as a
    /// generic 500, matching the historical behavior of the CV download path.
    #[error("record not found")]
    MissingRecord,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// An expected multipart field was absent from the upload.
    #[error("missing multipart field `{0}`")]
    MissingUploadField(&'static str),

    #[error("malformed payload: {0}")]
    BadPayload(#[from] serde_json::Error),

    /// Backstop for anything no route-specific arm claims.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.to_string());
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Conflict(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid username or password." })),
            )
                .into_response(),
            ApiError::MissingRecord => {
                error!("requested record does not exist");
                internal_json()
            }
            ApiError::Database(e) => {
                error!(error = %e, "database call failed");
                internal_json()
            }
            ApiError::Multipart(e) => {
                error!(error = %e, "multipart read failed");
                internal_json()
            }
            ApiError::MissingUploadField(field) => {
                error!(field, "upload missing a required field");
                internal_json()
            }
            ApiError::BadPayload(e) => {
                error!(error = %e, "payload parse failed");
                internal_json()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!").into_response()
            }
        }
    }
}

fn internal_json() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_field_errors() {
        let err = ApiError::validation("confirmPassword", "Passwords do not match.");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_and_credentials_are_client_errors() {
        assert_eq!(
            ApiError::Conflict("Email is already registered")
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_record_is_a_server_error() {
        assert_eq!(
            ApiError::MissingRecord.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_fallback_is_plain_text() {
        let response = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
    }
}
