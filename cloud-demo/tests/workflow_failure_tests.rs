//! Failure-isolation tests for the workflow
//!
//! Points every client at an unreachable endpoint and verifies that no
//! step's failure prevents the later steps from being attempted.

use std::time::Duration;

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use pretty_assertions::assert_eq;

use cloud_demo::config::DemoConfig;
use cloud_demo::report::Step;
use cloud_demo::workflow::DemoWorkflow;

/// Nothing listens here; every provider call fails with a connect error
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

async fn unreachable_sdk_config() -> SdkConfig {
    let credentials = Credentials::from_keys("test", "test", None);

    aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(UNREACHABLE_ENDPOINT)
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .retry_config(RetryConfig::disabled())
        .timeout_config(
            TimeoutConfig::builder()
                .operation_attempt_timeout(Duration::from_secs(2))
                .build(),
        )
        .load()
        .await
}

fn test_config() -> DemoConfig {
    DemoConfig {
        region: "us-east-1".to_string(),
        endpoint_url: Some(UNREACHABLE_ENDPOINT.to_string()),
        bucket_prefix: "bucket1".to_string(),
        queue_name: "queue1".to_string(),
        image_id: "ami-014d544cfef21b42d".to_string(),
        instance_type: "t2.micro".to_string(),
        settle_timeout: Duration::from_secs(1),
        teardown_timeout: Duration::from_secs(1),
        poll_interval: Duration::from_secs(1),
        json: false,
    }
}

#[tokio::test]
async fn every_step_is_attempted_despite_failures() {
    let sdk_config = unreachable_sdk_config().await;
    let workflow = DemoWorkflow::new(&sdk_config, test_config());

    let report = workflow.run().await;
    let steps: Vec<Step> = report.outcomes().iter().map(|outcome| outcome.step).collect();

    assert_eq!(
        steps,
        vec![
            Step::CreateInstance,
            Step::CreateBucket,
            Step::CreateQueue,
            Step::SettleWait,
            Step::EnumerateResources,
            Step::UploadObject,
            Step::QueueExercise,
            Step::TerminateInstances,
            Step::DeleteBuckets,
            Step::DeleteQueues,
            Step::DrainWait,
            Step::FinalEnumeration,
        ]
    );
}

#[tokio::test]
async fn creation_failures_do_not_stop_later_creations() {
    let sdk_config = unreachable_sdk_config().await;
    let workflow = DemoWorkflow::new(&sdk_config, test_config());

    let report = workflow.run().await;
    let failed = report.failed_steps();

    // All three independent creation calls were attempted and recorded
    assert!(failed.contains(&Step::CreateInstance));
    assert!(failed.contains(&Step::CreateBucket));
    assert!(failed.contains(&Step::CreateQueue));

    // Teardown was still attempted after the failures
    assert!(failed.contains(&Step::DeleteQueues));
    assert!(!report.is_full_success());
}
