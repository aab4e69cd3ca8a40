//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and posts.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use posts_core::post::{Post, PostPayload};
use posts_core::storage::StorageError;
use serde_json::{Map, Number, Value};

pub const ATTR_ID: &str = "id";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_USER_ID: &str = "userId";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_BODY: &str = "body";

// ============================================================================
// Post conversions
// ============================================================================

/// Convert a Post to DynamoDB item. Absent `title`/`body` are left out.
pub fn post_to_item(post: &Post) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(post.id.clone()));
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(post.created_at.clone()),
    );
    item.insert(
        ATTR_USER_ID.to_string(),
        AttributeValue::N(post.user_id.to_string()),
    );
    if let Some(title) = &post.title {
        item.insert(ATTR_TITLE.to_string(), json_to_attribute(title));
    }
    if let Some(body) = &post.body {
        item.insert(ATTR_BODY.to_string(), json_to_attribute(body));
    }

    item
}

/// Convert a DynamoDB item to Post.
pub fn item_to_post(item: &HashMap<String, AttributeValue>) -> Result<Post, StorageError> {
    Ok(Post {
        id: get_string(item, ATTR_ID)?,
        created_at: get_string(item, ATTR_CREATED_AT)?,
        user_id: get_u64(item, ATTR_USER_ID)?,
        title: item.get(ATTR_TITLE).map(attribute_to_json).transpose()?,
        body: item.get(ATTR_BODY).map(attribute_to_json).transpose()?,
    })
}

/// The key map addressing a single post.
pub fn post_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

// ============================================================================
// Update expression
// ============================================================================

/// The pieces of an UpdateItem request that sets `title` and `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParts {
    pub expression: String,
    pub names: HashMap<String, String>,
    /// `None` when every field is removed; DynamoDB rejects an empty map.
    pub values: Option<HashMap<String, AttributeValue>>,
}

/// Builds the update for a payload: present fields are SET, absent fields
/// are REMOVEd so the item mirrors the request.
pub fn update_parts(changes: &PostPayload) -> UpdateParts {
    let mut set = Vec::new();
    let mut remove = Vec::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    for (attr, value) in [(ATTR_TITLE, &changes.title), (ATTR_BODY, &changes.body)] {
        let name = format!("#{attr}");
        names.insert(name.clone(), attr.to_string());

        match value {
            Some(v) => {
                let placeholder = format!(":{attr}");
                set.push(format!("{name} = {placeholder}"));
                values.insert(placeholder, json_to_attribute(v));
            }
            None => remove.push(name),
        }
    }

    let mut clauses = Vec::new();
    if !set.is_empty() {
        clauses.push(format!("SET {}", set.join(", ")));
    }
    if !remove.is_empty() {
        clauses.push(format!("REMOVE {}", remove.join(", ")));
    }

    UpdateParts {
        expression: clauses.join(" "),
        names,
        values: (!values.is_empty()).then_some(values),
    }
}

// ============================================================================
// JSON <-> AttributeValue
// ============================================================================

/// Convert an arbitrary JSON value to its DynamoDB document representation.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to JSON.
///
/// String and number sets come back as arrays. Binary attributes are not
/// something this service ever writes and are rejected.
pub fn attribute_to_json(attr: &AttributeValue) -> Result<Value, StorageError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => fields
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(StorageError::invalid_item(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn parse_number(raw: &str) -> Result<Number, StorageError> {
    raw.parse::<Number>()
        .map_err(|e| StorageError::invalid_item(format!("Invalid number '{raw}': {e}")))
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StorageError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StorageError::invalid_item(format!("Missing or invalid field: {key}")))
}

fn get_u64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<u64, StorageError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| StorageError::invalid_item(format!("Missing or invalid field: {key}")))
}
