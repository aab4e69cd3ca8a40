use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use posts_core::storage::{storage_error_to_envelope, StorageError};
use thiserror::Error;

use super::EnvelopeResponse;

/// Everything a post handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The storage call failed. Passed through to the client unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The request body is not JSON. Rejected before touching storage.
    #[error("Failed to parse request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Storage(err) => {
                tracing::warn!(
                    code = %err.code,
                    status = ?err.status_code,
                    error = %err.message,
                    "Storage call failed"
                );
                EnvelopeResponse(storage_error_to_envelope(&err)).into_response()
            }
            err @ Self::MalformedBody(_) => {
                let message = err.to_string();
                tracing::warn!(error = %message, "Rejected request body");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}
