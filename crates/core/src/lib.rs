//! Core types for the posts service.
//!
//! Everything in here is free of I/O: the post model, its ordering, the
//! `{statusCode, body}` response envelope and the storage contract that the
//! backends in the `posts` binary implement.

pub mod envelope;
pub mod post;
pub mod serde;
pub mod storage;
