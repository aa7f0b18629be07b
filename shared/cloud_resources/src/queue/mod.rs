//! Message queue operations for the cloud demo
//!
//! Wraps the provider's queue service: queue lifecycle, a single-message
//! send with a title attribute, approximate depth reads, and long-poll
//! receives.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Queue client implementation
mod client;
/// Error types for queue operations
mod error;
/// View types for received messages
mod types;

pub use client::QueueClient;
pub use error::{QueueError, QueueResult};
pub use types::ReceivedMessage;
