//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the posts table that
//! stores all items in a HashMap wrapped in `Arc<RwLock<_>>`. This is useful
//! for tests and local development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use posts::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
