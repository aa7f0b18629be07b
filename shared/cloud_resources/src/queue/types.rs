/// View of a received message with the demo's title attribute extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// Provider-assigned message ID
    pub message_id: String,
    /// Value of the `Name` string attribute, when present
    pub title: Option<String>,
    /// Message body
    pub body: String,
}
