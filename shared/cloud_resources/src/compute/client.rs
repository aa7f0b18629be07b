//! EC2 compute client for the demo workflow

use aws_sdk_ec2::types::InstanceType;
use aws_sdk_ec2::Client as Ec2Client;
use chrono::DateTime;
use tracing::info;

use super::{
    error::{ComputeError, ComputeResult},
    types::{InstanceSummary, LaunchSpec},
};

/// Compute client wrapping the provider's EC2 API
pub struct ComputeClient {
    client: Ec2Client,
}

impl ComputeClient {
    /// Creates a compute client from a shared SDK configuration
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Ec2Client::new(config),
        }
    }

    /// Launches a single instance from the given spec and returns its ID
    ///
    /// # Errors
    ///
    /// Returns `ComputeError::RunInstances` if the provider call fails and
    /// `ComputeError::MissingInstanceId` if the response carries no
    /// instance.
    pub async fn launch_instance(&self, spec: &LaunchSpec) -> ComputeResult<String> {
        let result = self
            .client
            .run_instances()
            .image_id(&spec.image_id)
            .instance_type(InstanceType::from(spec.instance_type.as_str()))
            .min_count(1)
            .max_count(1)
            .send()
            .await?;

        let instance_id = result
            .instances()
            .first()
            .and_then(|instance| instance.instance_id())
            .ok_or(ComputeError::MissingInstanceId)?
            .to_string();

        info!("Launched instance {instance_id}");
        Ok(instance_id)
    }

    /// Lists a summary of every instance across all reservations
    ///
    /// # Errors
    ///
    /// Returns `ComputeError::DescribeInstances` if the provider call fails
    pub async fn list_instances(&self) -> ComputeResult<Vec<InstanceSummary>> {
        let result = self.client.describe_instances().send().await?;

        let summaries = result
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .filter_map(|instance| {
                let id = instance.instance_id()?.to_string();
                let state = instance
                    .state()
                    .and_then(|state| state.name())
                    .map(|name| name.as_str().to_string())
                    .unwrap_or_default();
                let instance_type = instance
                    .instance_type()
                    .map(|ty| ty.as_str().to_string())
                    .unwrap_or_default();
                let launch_time = instance
                    .launch_time()
                    .and_then(|ts| DateTime::from_timestamp(ts.secs(), ts.subsec_nanos()));

                Some(InstanceSummary {
                    id,
                    state,
                    instance_type,
                    launch_time,
                })
            })
            .collect();

        Ok(summaries)
    }

    /// Terminates every instance and returns the IDs a termination was
    /// requested for
    ///
    /// An empty fleet is not an error; the call becomes a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ComputeError::DescribeInstances` if the enumeration fails or
    /// `ComputeError::TerminateInstances` if the termination call fails.
    pub async fn terminate_all(&self) -> ComputeResult<Vec<String>> {
        let instance_ids: Vec<String> = self
            .list_instances()
            .await?
            .into_iter()
            .filter(|summary| !summary.is_terminated())
            .map(|summary| summary.id)
            .collect();

        if instance_ids.is_empty() {
            info!("No instances to terminate");
            return Ok(instance_ids);
        }

        self.client
            .terminate_instances()
            .set_instance_ids(Some(instance_ids.clone()))
            .send()
            .await?;

        info!("Requested termination of instances: {}", instance_ids.join(", "));
        Ok(instance_ids)
    }
}
