//! Compute instance operations for the cloud demo
//!
//! Wraps the provider's compute API: launching one instance from a fixed
//! spec, enumerating instance summaries, and terminating everything.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Compute client implementation
mod client;
/// Error types for compute operations
mod error;
/// View types for instances
mod types;

pub use client::ComputeClient;
pub use error::{ComputeError, ComputeResult};
pub use types::{InstanceSummary, LaunchSpec};
