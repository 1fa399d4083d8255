//! Error taxonomy for the SIP API: the storage failure kinds of the
//! persistence layer, and the single caller-visible error shape every
//! failing endpoint responds with.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failure kinds of the persistence layer.
///
/// Every storage-facing operation returns its result or one of these; no
/// error is logged-and-swallowed below the HTTP boundary, and nothing is
/// retried automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage location could not be created or opened. This is a
    /// fatal configuration error surfaced to the operator at startup;
    /// callers must not retry.
    #[error("storage location '{path}' is unavailable: {message}")]
    StorageUnavailable { path: String, message: String },

    /// A read or write against an initialized store failed.
    #[error("storage error: {source}")]
    Storage {
        #[from]
        source: sea_orm::DbErr,
    },

    /// The seed run failed; any partial writes were rolled back and
    /// nothing was persisted.
    #[error("seed failed and was rolled back: {source}")]
    SeedFailed { source: sea_orm::DbErr },
}

impl StoreError {
    /// Wraps a database error from inside the seed transaction.
    pub fn seed_failed(source: sea_orm::DbErr) -> Self {
        Self::SeedFailed { source }
    }
}

/// Caller-visible error response, serialized as `{"error": <message>}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// Response status; never part of the JSON body
    #[serde(skip_serializing, skip_deserializing)]
    pub status: StatusCode,
    /// Message shown to the caller
    #[schema(example = "storage error: no such table: organisations")]
    pub error: String,
}

impl ApiError {
    /// An error with an explicit status.
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            error: message.into(),
        }
    }

    /// Create a 500 error, the only failure status this API produces
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(self)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        // The boundary reports every failure exactly once: log it here,
        // then hand the message to the caller.
        tracing::error!("request failed against the store: {error}");
        Self::internal(error.to_string())
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(error: sea_orm::DbErr) -> Self {
        ApiError::from(StoreError::from(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_api_error_serializes_to_error_field_only() {
        let error = ApiError::internal("disk I/O error");

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "disk I/O error" }));
    }

    #[test]
    fn test_into_response_keeps_status() {
        let error = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "boom");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let store_error = StoreError::from(sea_orm::DbErr::Custom("disk full".to_string()));
        let api_error: ApiError = store_error.into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_error.error.contains("disk full"));
    }

    #[test]
    fn test_seed_failed_keeps_underlying_message() {
        let error = StoreError::seed_failed(sea_orm::DbErr::Custom(
            "FOREIGN KEY constraint failed".to_string(),
        ));

        let message = error.to_string();
        assert!(message.contains("rolled back"));
        assert!(message.contains("FOREIGN KEY constraint failed"));
    }

    #[test]
    fn test_storage_unavailable_names_the_path() {
        let error = StoreError::StorageUnavailable {
            path: "data".to_string(),
            message: "Permission denied".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("data"));
        assert!(message.contains("Permission denied"));
    }

    #[test]
    fn test_error_response_is_json() {
        let response = ApiError::internal("boom").into_response();

        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
