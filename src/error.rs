use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::api_response::{ErrorResponse, MessageTooLargeResponse, json_response};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidBody(String),

    #[error("Message size ({size} bytes) exceeds queue limit ({limit} bytes)")]
    MessageTooLarge { size: usize, limit: usize },

    #[error("failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("record store error: {0:#}")]
    Store(anyhow::Error),

    #[error("queue error: {0:#}")]
    Queue(anyhow::Error),
}

impl AppError {
    /// Attaches the failing operation so the error can be rendered.
    pub fn during(self, operation: Operation) -> HandlerError {
        HandlerError {
            operation,
            source: self,
        }
    }
}

/// The request handler an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateTicket,
    SubmitTicket,
}

impl Operation {
    fn failure_label(&self) -> &'static str {
        match self {
            Operation::CreateTicket => "Failed to create ticket",
            Operation::SubmitTicket => "Failed to submit ticket",
        }
    }
}

/// Error boundary for the ticket handlers.
///
/// `MessageTooLarge` becomes a 400 with a suggestion; everything else is
/// logged and returned as a 500 carrying the error text.
#[derive(Debug, Error)]
#[error("{operation:?}: {source}")]
pub struct HandlerError {
    pub operation: Operation,
    #[source]
    pub source: AppError,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match &self.source {
            AppError::MessageTooLarge { size, limit } => {
                warn!(size = *size, limit = *limit, "Rejecting oversized ticket message");
                json_response(
                    StatusCode::BAD_REQUEST,
                    &MessageTooLargeResponse {
                        error: "Message size exceeds limit",
                        message: self.source.to_string(),
                        suggestion: "Reduce description length or use external storage for large payloads",
                    },
                )
            }
            source => {
                // Error text is returned to the caller verbatim.
                error!(error = %source, "{}", self.operation.failure_label());
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &ErrorResponse {
                        error: self.operation.failure_label(),
                        message: source.to_string(),
                    },
                )
            }
        }
    }
}
