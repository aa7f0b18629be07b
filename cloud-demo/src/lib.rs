#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod config;
pub mod credentials;
pub mod report;
pub mod workflow;
