//! SQS queue client for the demo workflow

use aws_sdk_sqs::types::{MessageAttributeValue, QueueAttributeName};
use aws_sdk_sqs::Client as SqsClient;
use tracing::{debug, error, info};

use super::{
    error::{QueueError, QueueResult},
    types::ReceivedMessage,
};

/// Message attribute key carrying the demo message title
const TITLE_ATTRIBUTE: &str = "Name";
/// Maximum batch size for a single receive call
const RECEIVE_MAX_MESSAGES: i32 = 10;
/// Long-poll wait applied to receive calls, in seconds
const RECEIVE_WAIT_TIME_SECONDS: i32 = 5;

/// Queue client wrapping the provider's SQS API
pub struct QueueClient {
    client: SqsClient,
}

impl QueueClient {
    /// Creates a queue client from a shared SDK configuration
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: SqsClient::new(config),
        }
    }

    /// Creates a queue and returns its URL
    ///
    /// # Errors
    ///
    /// Returns `QueueError::CreateQueue` if the provider call fails and
    /// `QueueError::MissingQueueUrl` if the response carries no URL.
    pub async fn create_queue(&self, name: &str) -> QueueResult<String> {
        let result = self.client.create_queue().queue_name(name).send().await?;

        let queue_url = result
            .queue_url()
            .ok_or(QueueError::MissingQueueUrl)?
            .to_string();

        info!("Created queue {name} at {queue_url}");
        Ok(queue_url)
    }

    /// Lists the URLs of all queues
    ///
    /// # Errors
    ///
    /// Returns `QueueError::ListQueues` if the provider call fails
    pub async fn list_queues(&self) -> QueueResult<Vec<String>> {
        let result = self.client.list_queues().send().await?;
        Ok(result.queue_urls().to_vec())
    }

    /// Sends a text message carrying a `Name` title attribute
    ///
    /// # Errors
    ///
    /// Returns `QueueError::SendMessage` if the provider call fails
    pub async fn send_text_message(
        &self,
        queue_url: &str,
        body: &str,
        title: &str,
    ) -> QueueResult<String> {
        let attribute = MessageAttributeValue::builder()
            .data_type("String")
            .string_value(title)
            .build()?;

        let result = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .message_attributes(TITLE_ATTRIBUTE, attribute)
            .send()
            .await?;

        let message_id = result
            .message_id()
            .map(std::string::ToString::to_string)
            .unwrap_or_default();

        debug!("Sent message {message_id} to {queue_url}");
        Ok(message_id)
    }

    /// Reads the eventually-consistent approximate message count
    ///
    /// # Errors
    ///
    /// Returns `QueueError::GetQueueAttributes` if the provider call fails
    /// and `QueueError::InvalidDepth` if the attribute is missing or not a
    /// number.
    pub async fn approximate_depth(&self, queue_url: &str) -> QueueResult<usize> {
        let result = self
            .client
            .get_queue_attributes()
            .queue_url(queue_url)
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessages)
            .send()
            .await?;

        let raw = result
            .attributes()
            .and_then(|attrs| attrs.get(&QueueAttributeName::ApproximateNumberOfMessages))
            .ok_or_else(|| QueueError::InvalidDepth("attribute not returned".to_string()))?;

        raw.parse()
            .map_err(|_| QueueError::InvalidDepth(raw.clone()))
    }

    /// Receives up to 10 messages with a 5 second long poll
    ///
    /// Messages without a body are skipped; the title attribute is optional.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::ReceiveMessage` if the provider call fails
    pub async fn receive_messages(&self, queue_url: &str) -> QueueResult<Vec<ReceivedMessage>> {
        let result = self
            .client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(RECEIVE_MAX_MESSAGES)
            .wait_time_seconds(RECEIVE_WAIT_TIME_SECONDS)
            .message_attribute_names("All")
            .send()
            .await?;

        let messages = result
            .messages()
            .iter()
            .filter_map(|msg| {
                let body = msg.body()?.to_string();
                let message_id = msg.message_id().unwrap_or_default().to_string();
                let title = msg
                    .message_attributes()
                    .and_then(|attrs| attrs.get(TITLE_ATTRIBUTE))
                    .and_then(|attr| attr.string_value())
                    .map(std::string::ToString::to_string);

                Some(ReceivedMessage {
                    message_id,
                    title,
                    body,
                })
            })
            .collect();

        Ok(messages)
    }

    /// Deletes one queue by URL
    ///
    /// # Errors
    ///
    /// Returns `QueueError::DeleteQueue` if the provider call fails
    pub async fn delete_queue(&self, queue_url: &str) -> QueueResult<()> {
        self.client
            .delete_queue()
            .queue_url(queue_url)
            .send()
            .await?;

        info!("Deleted queue {queue_url}");
        Ok(())
    }

    /// Deletes every queue, continuing past per-queue failures
    ///
    /// Returns the URLs that were deleted.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::ListQueues` if the enumeration itself fails;
    /// individual delete failures are logged and skipped.
    pub async fn delete_all_queues(&self) -> QueueResult<Vec<String>> {
        let queue_urls = self.list_queues().await?;
        let mut deleted = Vec::with_capacity(queue_urls.len());

        for queue_url in queue_urls {
            match self.delete_queue(&queue_url).await {
                Ok(()) => deleted.push(queue_url),
                Err(e) => error!("Failed to delete queue {queue_url}: {e}"),
            }
        }

        Ok(deleted)
    }
}
