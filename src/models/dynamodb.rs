use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use tracing::debug;

use super::ticket::TicketRecord;
use super::ticketsystem::RecordStore;

/// Writes ticket records to a DynamoDB table.
#[derive(Clone)]
pub struct DynamoDbStore {
    client: Client,
    table: String,
}

impl DynamoDbStore {
    pub fn new(config: &aws_config::SdkConfig, table: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), table)
    }

    pub fn from_client(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

fn to_item(record: &TicketRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("ticket_id".to_string(), AttributeValue::S(record.ticket_id.clone())),
        ("title".to_string(), AttributeValue::S(record.title.clone())),
        ("description".to_string(), AttributeValue::S(record.description.clone())),
        ("status".to_string(), AttributeValue::S(record.status.as_str().to_string())),
        ("created_at".to_string(), AttributeValue::S(record.created_at.clone())),
    ])
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    fn name(&self) -> &'static str {
        "DynamoDB"
    }

    async fn put(&self, record: &TicketRecord) -> anyhow::Result<()> {
        debug!(table = %self.table, "Putting ticket item");
        self.client
            .put_item()
            .table_name(self.table.as_str())
            .set_item(Some(to_item(record)))
            .send()
            .await
            .context("DynamoDB put_item failed")?;
        Ok(())
    }
}
