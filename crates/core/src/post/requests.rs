use serde_json::Value;

use super::Post;

/// Request payload for creating or updating a post.
///
/// Nothing is validated: both fields accept any JSON value or may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPayload {
    pub title: Option<Value>,
    pub body: Option<Value>,
}

impl From<Value> for PostPayload {
    /// Reads `title` and `body` off a parsed request body.
    ///
    /// Only an object can carry fields: any other JSON value yields a payload
    /// with both fields absent. An explicit `null` is kept.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                title: fields.remove("title"),
                body: fields.remove("body"),
            },
            _ => Self::default(),
        }
    }
}

impl PostPayload {
    /// Builds a brand new post from this payload.
    pub fn into_post(self) -> Post {
        Post::new(self.title, self.body)
    }

    /// Overwrites the mutable fields of `post`, leaving the rest untouched.
    pub fn apply_to(&self, post: &mut Post) {
        post.title = self.title.clone();
        post.body = self.body.clone();
    }
}
