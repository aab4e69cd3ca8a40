use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes raised by the posts table.
///
/// These are the codes DynamoDB uses; the in-memory backend raises the same
/// ones for the same situations.
pub mod codes {
    pub const CONDITIONAL_CHECK_FAILED: &str = "ConditionalCheckFailedException";
    pub const VALIDATION: &str = "ValidationException";
    pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";
    pub const THROUGHPUT_EXCEEDED: &str = "ProvisionedThroughputExceededException";
    pub const REQUEST_LIMIT_EXCEEDED: &str = "RequestLimitExceeded";
    pub const THROTTLING: &str = "ThrottlingException";
    pub const TRANSACTION_CONFLICT: &str = "TransactionConflictException";
    pub const INTERNAL_SERVER_ERROR: &str = "InternalServerError";
    pub const INVALID_ITEM: &str = "InvalidItem";
}

/// A failed storage call.
///
/// This is the only error clients ever see: it is serialized verbatim into
/// the response body and its `status_code` (when there is one) becomes the
/// response status.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
#[serde(rename_all = "camelCase")]
pub struct StorageError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub retryable: bool,
}

impl StorageError {
    /// Creates an error with no status code.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let retryable = is_retryable_code(&code);

        Self {
            code,
            message: message.into(),
            status_code: None,
            retryable,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// A conditional write found its condition false (e.g. updating a missing id).
    pub fn conditional_check_failed() -> Self {
        Self::new(
            codes::CONDITIONAL_CHECK_FAILED,
            "The conditional request failed",
        )
        .with_status(400)
    }

    /// The request parameters were rejected by the table.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(codes::VALIDATION, message).with_status(400)
    }

    /// The configured table does not exist.
    pub fn resource_not_found(table_name: &str) -> Self {
        Self::new(
            codes::RESOURCE_NOT_FOUND,
            format!("Requested resource not found: Table: {table_name} not found"),
        )
        .with_status(400)
    }

    /// A stored item could not be read back as a post.
    pub fn invalid_item(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_ITEM, message)
    }
}

/// Whether the table reports this failure as transient.
pub fn is_retryable_code(code: &str) -> bool {
    matches!(
        code,
        codes::THROUGHPUT_EXCEEDED
            | codes::REQUEST_LIMIT_EXCEEDED
            | codes::THROTTLING
            | codes::TRANSACTION_CONFLICT
            | codes::INTERNAL_SERVER_ERROR
    )
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::conditional_check_failed();
        assert_eq!(
            error.to_string(),
            "ConditionalCheckFailedException: The conditional request failed"
        );
    }

    #[test]
    fn test_serializes_like_the_table_error() {
        let error = StorageError::conditional_check_failed();
        let value = serde_json::to_value(&error).unwrap();

        assert_eq!(
            value,
            json!({
                "code": "ConditionalCheckFailedException",
                "message": "The conditional request failed",
                "statusCode": 400,
                "retryable": false
            })
        );
    }

    #[test]
    fn test_missing_status_is_omitted() {
        let error = StorageError::new("NetworkingError", "connection refused");
        let value = serde_json::to_value(&error).unwrap();

        assert!(value.get("statusCode").is_none());
        assert_eq!(value["code"], "NetworkingError");
    }

    #[test]
    fn test_retryable_codes() {
        assert!(StorageError::new(codes::THROTTLING, "slow down").retryable);
        assert!(StorageError::new(codes::THROUGHPUT_EXCEEDED, "slow down").retryable);
        assert!(!StorageError::validation("bad limit").retryable);
        assert!(!StorageError::invalid_item("missing id").retryable);
    }

    #[test]
    fn test_resource_not_found_mentions_table() {
        let error = StorageError::resource_not_found("posts");
        assert_eq!(error.status_code, Some(400));
        assert!(error.message.contains("posts"));
    }
}
