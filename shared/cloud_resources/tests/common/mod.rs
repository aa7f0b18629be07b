//! LocalStack test setup utilities

#![allow(dead_code)]

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;

/// Test configuration for LocalStack
pub const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
pub const TEST_REGION: &str = "us-east-1";

/// Builds an SDK configuration pointed at LocalStack with hardcoded
/// credentials for CI
pub async fn localstack_config() -> SdkConfig {
    let credentials = Credentials::from_keys(
        "test", // AWS_ACCESS_KEY_ID
        "test", // AWS_SECRET_ACCESS_KEY
        None,   // no session token
    );

    aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .region(Region::new(TEST_REGION))
        .credentials_provider(credentials)
        .load()
        .await
}
