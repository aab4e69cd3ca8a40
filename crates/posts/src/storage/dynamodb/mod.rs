//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `PostRepository`
//! using `aws-sdk-dynamodb`. The table has a single string hash key `id` and
//! no secondary indexes.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
