//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the posts table as a repository trait object
//! and nothing mutable: every request is independent of every other.

use std::sync::Arc;

use posts_core::storage::PostRepository;

use crate::config::{Config, GetPostMode};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The posts table.
    pub post_repo: Arc<dyn PostRepository>,
    /// Behaviour of `GET /post/{id}`.
    pub get_post_mode: GetPostMode,
}

impl AppState {
    /// Creates a new AppState over the given repository.
    pub fn with_repository(post_repo: Arc<dyn PostRepository>, get_post_mode: GetPostMode) -> Self {
        Self {
            post_repo,
            get_post_mode,
        }
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with an in-memory table.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(table = %config.table_name, "Using in-memory posts table");

            Ok(Self::with_repository(
                Arc::new(InMemoryRepository::new()),
                config.get_post_mode,
            ))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let dynamodb_repo = DynamoDbRepository::from_config(config).await;

            tracing::info!(
                table = dynamodb_repo.table_name(),
                endpoint = config.aws_endpoint_url.as_deref().unwrap_or("default"),
                region = %config.aws_region,
                "Using DynamoDB posts table"
            );

            Ok(Self::with_repository(
                Arc::new(dynamodb_repo),
                config.get_post_mode,
            ))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with an empty in-memory table for testing.
        fn default() -> Self {
            Self::with_repository(Arc::new(InMemoryRepository::new()), GetPostMode::Lookup)
        }
    }
}
