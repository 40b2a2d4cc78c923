use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::Announcement;
use crate::store::{AnnouncementStore, ScanPage};

/// Partition key attribute of the announcements table.
pub const KEY_ATTRIBUTE: &str = "atitle";

/// DynamoDB client wrapper for announcement storage.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a new `DynamoStore` by loading AWS configuration from the
    /// environment and constructing a DynamoDB client.
    pub async fn new(table_name: impl Into<String>) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::from_client(Client::new(&config), table_name)
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// The DynamoDB table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Convert an announcement into a DynamoDB item. Absent optional fields are
/// left out rather than stored as NULL.
fn to_item(announcement: &Announcement) -> Result<HashMap<String, AttributeValue>, CoreError> {
    Ok(serde_dynamo::to_item(announcement)?)
}

#[async_trait]
impl AnnouncementStore for DynamoStore {
    async fn put(&self, announcement: &Announcement) -> Result<(), CoreError> {
        let item = to_item(announcement)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        debug!(table = %self.table_name, title = %announcement.title, "put announcement");
        Ok(())
    }

    async fn scan(&self) -> Result<ScanPage, CoreError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        // A single Scan call returns at most 1 MB. Follow-up pages are not
        // requested.
        let truncated = output.last_evaluated_key().is_some();
        if truncated {
            warn!(
                table = %self.table_name,
                "scan result truncated, returning first page only"
            );
        }

        let items: Vec<Announcement> = serde_dynamo::from_items(output.items.unwrap_or_default())?;
        debug!(table = %self.table_name, count = items.len(), "scanned announcements");

        Ok(ScanPage { items, truncated })
    }
}
