//! Pure function turning a storage failure into a response envelope.

use super::StorageError;
use crate::envelope::Envelope;

/// Formats a [`StorageError`] as a response envelope.
///
/// There is no translation: the error's own status code (possibly absent) is
/// the status, and the serialized error is the body.
///
/// # Examples
///
/// ```
/// use posts_core::storage::{storage_error_to_envelope, StorageError};
///
/// let envelope = storage_error_to_envelope(&StorageError::conditional_check_failed());
/// assert_eq!(envelope.status_code, Some(400));
/// ```
pub fn storage_error_to_envelope(error: &StorageError) -> Envelope {
    Envelope::pass_through(error.status_code, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::MISSING_STATUS_FALLBACK;

    #[test]
    fn test_status_is_copied() {
        let error = StorageError::validation("Limit must be positive");
        let envelope = storage_error_to_envelope(&error);

        assert_eq!(envelope.status_code, Some(400));
        assert_eq!(envelope.http_status(), 400);
    }

    #[test]
    fn test_body_is_the_error_object() {
        let error = StorageError::resource_not_found("posts");
        let envelope = storage_error_to_envelope(&error);

        let parsed: StorageError = serde_json::from_str(&envelope.body).unwrap();
        assert_eq!(parsed, error);
    }

    #[test]
    fn test_error_without_status() {
        let error = StorageError::new("TimeoutError", "request timed out");
        let envelope = storage_error_to_envelope(&error);

        assert_eq!(envelope.status_code, None);
        assert_eq!(envelope.http_status(), MISSING_STATUS_FALLBACK);
    }
}
