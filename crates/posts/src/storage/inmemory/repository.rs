//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::post::{Post, PostPayload};
use posts_core::storage::{PostRepository, Result, ScanLimit, StorageError};

/// In-memory posts table.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
/// Scans return items in HashMap order, so a limited scan picks arbitrary
/// posts just like a real table scan does.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    posts: Arc<RwLock<HashMap<String, Post>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn put_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn scan_posts(&self, limit: Option<ScanLimit>) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        let take = limit.map_or(usize::MAX, |l| l.get() as usize);
        Ok(posts.values().take(take).cloned().collect())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn update_post(&self, id: &str, changes: &PostPayload) -> Result<Post> {
        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(id)
            .ok_or_else(StorageError::conditional_check_failed)?;
        changes.apply_to(post);
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        let mut posts = self.posts.write().await;
        posts.remove(id);
        Ok(())
    }
}
