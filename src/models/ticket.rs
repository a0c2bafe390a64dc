use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::api_request::{CreateTicketRequest, SubmitTicketRequest};
use crate::error::AppError;

/// Upper bound for a queued message body, in UTF-8 bytes (256 KiB).
///
/// Applies to the compact serde_json encoding that is actually sent: no
/// whitespace separators, non-ASCII text as raw UTF-8 rather than `\uXXXX`.
pub const MAX_MESSAGE_SIZE: usize = 256 * 1024;

/// Lifecycle state of a stored ticket. Tickets are only ever created here,
/// so `Open` is the only state this service writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
        }
    }
}

/// A ticket as persisted in the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Random v4 UUID, primary key of the record
    pub ticket_id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    /// RFC 3339 timestamp in UTC, e.g. `2025-06-01T12:30:00.123456Z`
    pub created_at: String,
}

impl TicketRecord {
    pub fn open(request: CreateTicketRequest) -> Self {
        Self {
            ticket_id: Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            status: TicketStatus::Open,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// The payload handed to the queue for downstream processing.
///
/// Field order is part of the wire format: `ticket_id, title, description, priority`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMessage {
    pub ticket_id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
}

impl From<SubmitTicketRequest> for TicketMessage {
    fn from(request: SubmitTicketRequest) -> Self {
        Self {
            ticket_id: request.ticket_id,
            title: request.title,
            description: request.description,
            priority: request.priority,
        }
    }
}

impl TicketMessage {
    /// Serializes the message and checks it against [`MAX_MESSAGE_SIZE`].
    ///
    /// The size is measured on the exact bytes that will be sent.
    pub fn to_body(&self) -> Result<String, AppError> {
        let body = serde_json::to_string(self)?;
        let size = body.len();
        if size > MAX_MESSAGE_SIZE {
            return Err(AppError::MessageTooLarge {
                size,
                limit: MAX_MESSAGE_SIZE,
            });
        }
        Ok(body)
    }
}
