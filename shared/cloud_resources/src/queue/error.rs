use aws_sdk_sqs::error::{BuildError, SdkError};
use aws_sdk_sqs::operation::create_queue::CreateQueueError;
use aws_sdk_sqs::operation::delete_queue::DeleteQueueError;
use aws_sdk_sqs::operation::get_queue_attributes::GetQueueAttributesError;
use aws_sdk_sqs::operation::list_queues::ListQueuesError;
use aws_sdk_sqs::operation::receive_message::ReceiveMessageError;
use aws_sdk_sqs::operation::send_message::SendMessageError;
use thiserror::Error;

/// Result type alias for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Error types for queue operations
#[derive(Error, Debug)]
pub enum QueueError {
    /// Error creating a queue
    #[error("Failed to create queue")]
    CreateQueue(#[from] SdkError<CreateQueueError>),

    /// Error listing queues
    #[error("Failed to list queues")]
    ListQueues(#[from] SdkError<ListQueuesError>),

    /// Error sending a message
    #[error("Failed to send message")]
    SendMessage(#[from] SdkError<SendMessageError>),

    /// Error reading queue attributes
    #[error("Failed to read queue attributes")]
    GetQueueAttributes(#[from] SdkError<GetQueueAttributesError>),

    /// Error receiving messages
    #[error("Failed to receive messages")]
    ReceiveMessage(#[from] SdkError<ReceiveMessageError>),

    /// Error deleting a queue
    #[error("Failed to delete queue")]
    DeleteQueue(#[from] SdkError<DeleteQueueError>),

    /// Error building a message attribute value
    #[error("Failed to build message attribute: {0}")]
    AttributeBuild(#[from] BuildError),

    /// The provider did not return a queue URL
    #[error("Queue URL missing from provider response")]
    MissingQueueUrl,

    /// The approximate depth attribute was missing or unparseable
    #[error("Invalid approximate depth attribute: {0}")]
    InvalidDepth(String),
}
