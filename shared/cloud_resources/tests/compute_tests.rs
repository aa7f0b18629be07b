//! Compute client tests against LocalStack

mod common;

use cloud_resources::compute::{ComputeClient, LaunchSpec};

fn demo_spec() -> LaunchSpec {
    LaunchSpec {
        image_id: "ami-014d544cfef21b42d".to_string(),
        instance_type: "t2.micro".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires LocalStack on localhost:4566"]
async fn launched_instance_shows_up_in_listing() {
    let config = common::localstack_config().await;
    let client = ComputeClient::new(&config);

    let instance_id = client
        .launch_instance(&demo_spec())
        .await
        .expect("Failed to launch instance");

    let instances = client
        .list_instances()
        .await
        .expect("Failed to list instances");
    let summary = instances
        .iter()
        .find(|summary| summary.id == instance_id)
        .expect("launched instance missing from listing");

    assert_eq!(summary.instance_type, "t2.micro");
    assert!(!summary.is_terminated());

    client
        .terminate_all()
        .await
        .expect("Failed to terminate instances");
}

#[tokio::test]
#[ignore = "requires LocalStack on localhost:4566"]
async fn terminate_all_empties_the_fleet() {
    let config = common::localstack_config().await;
    let client = ComputeClient::new(&config);

    client
        .launch_instance(&demo_spec())
        .await
        .expect("Failed to launch instance");

    let terminated = client
        .terminate_all()
        .await
        .expect("Failed to terminate instances");
    assert!(!terminated.is_empty());

    let instances = client
        .list_instances()
        .await
        .expect("Failed to list instances");
    assert!(instances
        .iter()
        .filter(|summary| terminated.contains(&summary.id))
        .all(|summary| summary.state == "shutting-down" || summary.is_terminated()));
}
