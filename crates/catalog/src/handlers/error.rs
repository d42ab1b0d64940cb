//! HTTP rendering of [`ServiceError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::service::ServiceError;

pub const INVALIDATION_FAILED_CODE: &str = "cache_invalidation_failed";

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `Cache`, `Store`, `Invalidation` -> 500 (Internal Server Error)
pub fn service_error_status(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::AlreadyExists { .. } => StatusCode::CONFLICT,
        ServiceError::Cache { .. }
        | ServiceError::Store { .. }
        | ServiceError::Invalidation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error response with a message body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!(status = %status, message = %message, "API error");
    (status, Json(json!({ "message": message }))).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = service_error_status(&self);
        match &self {
            ServiceError::Validation(_) | ServiceError::AlreadyExists { .. } => {
                error_response(status, self.to_string())
            }
            ServiceError::Invalidation { id, source } => {
                tracing::error!(id, error = %source, "Product created but listing cache was not invalidated");
                (
                    status,
                    Json(json!({
                        "message": "server error",
                        "code": INVALIDATION_FAILED_CODE,
                        "id": id,
                    })),
                )
                    .into_response()
            }
            ServiceError::Cache { .. } | ServiceError::Store { .. } => {
                tracing::error!(error = %self, "Request failed");
                (status, Json(json!({ "message": "server error" }))).into_response()
            }
        }
    }
}
