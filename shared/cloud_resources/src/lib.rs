//! Provider resource clients for the cloud demo
//!
//! This crate wraps the three provider services the demo touches — compute
//! instances, object-storage buckets, and message queues — behind thin typed
//! clients, plus a bounded poller for waiting on resource-state transitions.

pub mod bucket;
pub mod compute;
pub mod queue;
pub mod wait;
