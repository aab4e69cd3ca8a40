use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::serde::deserialize_present;

/// Owner attributed to every post. There is no authenticated principal.
pub const OWNER_USER_ID: u64 = 1;

/// A post stored in the posts table.
///
/// `title` and `body` hold whatever JSON the client sent. A field the client
/// left out stays `None` and is omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub created_at: String,
    pub user_id: u64,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<Value>,
}

impl Post {
    /// Creates a new post with a fresh UUID and the current timestamp.
    pub fn new(title: Option<Value>, body: Option<Value>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: timestamp_now(),
            user_id: OWNER_USER_ID,
            title,
            body,
        }
    }
}

/// Current UTC time as ISO-8601 with millisecond precision and a `Z` suffix.
///
/// Fixed precision and timezone keep string order equal to time order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
