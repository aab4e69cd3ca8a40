//! The `{statusCode, body}` response envelope every handler produces.
//!
//! `body` is always JSON text. `statusCode` is optional because storage
//! failures are passed through with whatever status they carried, which may
//! be none at all.

use serde::{Deserialize, Serialize};

/// Status an API gateway answers with when an integration response has no
/// usable status code.
pub const MISSING_STATUS_FALLBACK: u16 = 502;

const SERIALIZATION_FAILURE_STATUS: u16 = 500;
const SERIALIZATION_FAILURE_MESSAGE: &str = "Failed to serialize response";

/// A formatted handler response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub body: String,
}

impl Envelope {
    /// Formats `payload` as JSON text under the given status code.
    pub fn new<T>(status_code: u16, payload: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self::pass_through(Some(status_code), payload)
    }

    /// Like [`Envelope::new`], but the status code may be absent.
    pub fn pass_through<T>(status_code: Option<u16>, payload: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_string(payload) {
            Ok(body) => Self { status_code, body },
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response payload");
                Self::serialization_failure()
            }
        }
    }

    /// Stands in for a payload that could not be formatted as JSON.
    fn serialization_failure() -> Self {
        Self {
            status_code: Some(SERIALIZATION_FAILURE_STATUS),
            body: format!(r#"{{"error":"{SERIALIZATION_FAILURE_MESSAGE}"}}"#),
        }
    }

    /// The HTTP status to send for this envelope.
    ///
    /// A missing or out-of-range status code becomes [`MISSING_STATUS_FALLBACK`].
    pub fn http_status(&self) -> u16 {
        match self.status_code {
            Some(code) if (100..=599).contains(&code) => code,
            _ => MISSING_STATUS_FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_is_json_text_of_payload() {
        let envelope = Envelope::new(200, &json!({"message": "ok"}));

        assert_eq!(envelope.status_code, Some(200));
        assert_eq!(envelope.body, r#"{"message":"ok"}"#);
    }

    #[test]
    fn test_array_payload() {
        let envelope = Envelope::new(200, &vec![1, 2, 3]);
        assert_eq!(envelope.body, "[1,2,3]");
    }

    #[test]
    fn test_unserializable_payload_is_server_error() {
        // JSON object keys must be strings
        let payload: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);

        let envelope = Envelope::new(200, &payload);

        assert_eq!(envelope.status_code, Some(500));
        assert_eq!(envelope.http_status(), 500);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&envelope.body).unwrap(),
            json!({"error": "Failed to serialize response"})
        );
    }

    #[test]
    fn test_missing_status_is_kept() {
        let envelope = Envelope::pass_through(None, &json!({"code": "NetworkingError"}));

        assert_eq!(envelope.status_code, None);
        assert_eq!(envelope.http_status(), MISSING_STATUS_FALLBACK);
    }

    #[test]
    fn test_out_of_range_status_falls_back() {
        let envelope = Envelope::new(1000, &json!(null));
        assert_eq!(envelope.http_status(), MISSING_STATUS_FALLBACK);
    }

    #[test]
    fn test_envelope_serialization() {
        let envelope = Envelope::new(201, &json!({"id": "abc"}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({"statusCode": 201, "body": "{\"id\":\"abc\"}"})
        );
    }

    #[test]
    fn test_envelope_without_status_omits_field() {
        let envelope = Envelope::pass_through(None, &json!({}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value, json!({"body": "{}"}));
    }
}
