use async_trait::async_trait;

use crate::post::{Post, PostPayload};

use super::{Result, ScanLimit};

/// The posts table: a key-value table keyed by the string `id`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a post, replacing any item with the same id.
    async fn put_post(&self, post: &Post) -> Result<()>;

    /// Scans the table. With a limit, at most that many arbitrary posts are
    /// returned; the result is unordered either way.
    async fn scan_posts(&self, limit: Option<ScanLimit>) -> Result<Vec<Post>>;

    /// Gets a post by its id.
    async fn get_post(&self, id: &str) -> Result<Option<Post>>;

    /// Sets `title` and `body` on an existing post and returns the post as
    /// stored afterwards. Fails with a conditional check error when the id
    /// does not exist. An absent field is removed from the item.
    async fn update_post(&self, id: &str, changes: &PostPayload) -> Result<Post>;

    /// Deletes a post by its id. Deleting an unknown id succeeds.
    async fn delete_post(&self, id: &str) -> Result<()>;
}
