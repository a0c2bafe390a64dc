use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_sqs::Client;
use tracing::debug;

use super::ticketsystem::MessageQueue;

/// Sends ticket messages to an SQS queue.
#[derive(Clone)]
pub struct SqsQueue {
    client: Client,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(config: &aws_config::SdkConfig, queue_url: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), queue_url)
    }

    pub fn from_client(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    fn name(&self) -> &'static str {
        "SQS"
    }

    async fn send(&self, body: String) -> anyhow::Result<String> {
        debug!(queue_url = %self.queue_url, size = body.len(), "Sending message");
        let output = self
            .client
            .send_message()
            .queue_url(self.queue_url.as_str())
            .message_body(body)
            .send()
            .await
            .context("SQS send_message failed")?;

        output
            .message_id()
            .map(str::to_string)
            .context("SQS response did not include a message id")
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_sqs::{
        operation::send_message::{SendMessageError, SendMessageOutput},
        types::error::InvalidMessageContents,
    };
    use aws_smithy_mocks::{mock, mock_client};

    use super::*;

    const QUEUE_URL: &str = "https://sqs.eu-central-1.amazonaws.com/123/tickets";

    #[tokio::test]
    async fn send_returns_queue_assigned_id() {
        let rule = mock!(Client::send_message)
            .match_requests(|req| {
                req.queue_url() == Some(QUEUE_URL) && req.message_body() == Some(r#"{"a":1}"#)
            })
            .then_output(|| SendMessageOutput::builder().message_id("m-1").build());
        let queue = SqsQueue::from_client(mock_client!(aws_sdk_sqs, [&rule]), QUEUE_URL);

        let message_id = queue.send(r#"{"a":1}"#.to_string()).await.unwrap();

        assert_eq!(message_id, "m-1");
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn response_without_message_id_is_an_error() {
        let rule = mock!(Client::send_message).then_output(|| SendMessageOutput::builder().build());
        let queue = SqsQueue::from_client(mock_client!(aws_sdk_sqs, [&rule]), QUEUE_URL);

        let err = queue.send("{}".to_string()).await.unwrap_err();

        assert!(
            format!("{err:#}").contains("did not include a message id"),
            "got: {err:#}"
        );
    }

    #[tokio::test]
    async fn service_error_is_propagated() {
        let rule = mock!(Client::send_message).then_error(|| {
            SendMessageError::InvalidMessageContents(
                InvalidMessageContents::builder().message("invalid characters").build(),
            )
        });
        let queue = SqsQueue::from_client(mock_client!(aws_sdk_sqs, [&rule]), QUEUE_URL);

        let err = queue.send("{}".to_string()).await.unwrap_err();

        assert!(format!("{err:#}").contains("send_message failed"), "got: {err:#}");
    }
}
