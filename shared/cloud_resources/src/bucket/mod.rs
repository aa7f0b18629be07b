//! Object-storage bucket operations for the cloud demo
//!
//! Wraps the provider's object-storage API: bucket lifecycle, a single
//! empty-object upload, and bulk teardown of buckets with their contents.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Bucket client implementation
mod client;
/// Error types for bucket operations
mod error;

pub use client::BucketClient;
pub use error::{BucketError, BucketResult};
