//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StorageError` from `posts_core::storage`. Nothing
//! is translated: the service's own error code, message and HTTP status are
//! carried over as they are.

use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use posts_core::storage::StorageError;

/// Map any operation's SDK error to StorageError.
pub fn map_sdk_error<E>(err: SdkError<E, HttpResponse>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let status_code = err.raw_response().map(|r| r.status().as_u16());
    let fallback_code = match &err {
        SdkError::ConstructionFailure(_) => "ConstructionFailure",
        SdkError::TimeoutError(_) => "TimeoutError",
        SdkError::DispatchFailure(_) => "NetworkingError",
        SdkError::ResponseError(_) => "ResponseError",
        _ => "UnknownError",
    };

    from_parts(
        err.code(),
        err.message(),
        status_code,
        fallback_code,
        || DisplayErrorContext(&err).to_string(),
    )
}

/// Assemble a StorageError from error metadata, falling back when the
/// service did not provide a code or message.
fn from_parts(
    code: Option<&str>,
    message: Option<&str>,
    status_code: Option<u16>,
    fallback_code: &str,
    fallback_message: impl FnOnce() -> String,
) -> StorageError {
    let code = code.unwrap_or(fallback_code);
    let message = message
        .map(str::to_string)
        .unwrap_or_else(fallback_message);

    let error = StorageError::new(code, message);
    match status_code {
        Some(status) => error.with_status(status),
        None => error,
    }
}
