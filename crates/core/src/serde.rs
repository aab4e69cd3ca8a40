//! Serde helper functions for request payloads.
//!
//! Post fields are free-form JSON. A field that is present (even as `null`)
//! has to stay distinguishable from a field that is missing, which plain
//! `Option<Value>` does not do.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a present field as `Some(value)`, keeping explicit `null`.
///
/// Combine with `#[serde(default)]` so that a missing field becomes `None`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
