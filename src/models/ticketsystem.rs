use std::sync::Arc;

use async_trait::async_trait;

use super::ticket::TicketRecord;

/// Key-value store that ticket records are written to.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Name of the backend, used in logs
    fn name(&self) -> &'static str;

    /// Writes `record` keyed by its `ticket_id`.
    async fn put(&self, record: &TicketRecord) -> anyhow::Result<()>;
}

/// Queue that ticket messages are sent to.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    fn name(&self) -> &'static str;

    /// Sends one message body and returns the id the queue assigned to it.
    async fn send(&self, body: String) -> anyhow::Result<String>;
}

/// Collaborators shared by every request. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub queue: Arc<dyn MessageQueue>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, queue: Arc<dyn MessageQueue>) -> Self {
        Self { store, queue }
    }
}
