//! DynamoDB repository implementation.
//!
//! Implements `PostRepository` from `posts_core::storage` using DynamoDB.
//! Each method is exactly one SDK call.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use posts_core::post::{Post, PostPayload};
use posts_core::storage::{PostRepository, Result, ScanLimit, StorageError};

use super::conversions::{item_to_post, post_key, post_to_item, update_parts, ATTR_ID};
use super::error::map_sdk_error;
use crate::config::Config;

/// DynamoDB-based posts table.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region and,
    /// when set, a custom endpoint (local DynamoDB).
    pub async fn from_config(config: &Config) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl PostRepository for DynamoDbRepository {
    async fn put_post(&self, post: &Post) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(post_to_item(post)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn scan_posts(&self, limit: Option<ScanLimit>) -> Result<Vec<Post>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_limit(limit.map(ScanLimit::get))
            .send()
            .await
            .map_err(map_sdk_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_post).collect()
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_post(&item)?)),
            None => Ok(None),
        }
    }

    async fn update_post(&self, id: &str, changes: &PostPayload) -> Result<Post> {
        let parts = update_parts(changes);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(post_key(id)))
            .condition_expression(format!("attribute_exists({ATTR_ID})"))
            .update_expression(parts.expression)
            .set_expression_attribute_names(Some(parts.names))
            .set_expression_attribute_values(parts.values)
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let attributes = result.attributes.ok_or_else(|| {
            StorageError::invalid_item(format!("UpdateItem returned no attributes for {id}"))
        })?;
        item_to_post(&attributes)
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(post_key(id)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }
}
