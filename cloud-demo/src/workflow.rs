//! The linear demo workflow
//!
//! Creates one instance, one bucket, and one queue, waits for them to become
//! visible, enumerates everything, uploads an object, exercises the queue,
//! then tears all three resource kinds down and waits for the enumeration to
//! come back empty. Every step is attempted regardless of earlier failures;
//! each records an outcome in the run report.

use aws_config::SdkConfig;
use chrono::{DateTime, Utc};
use cloud_resources::bucket::BucketClient;
use cloud_resources::compute::{ComputeClient, LaunchSpec};
use cloud_resources::queue::QueueClient;
use cloud_resources::wait::{poll_until, WaitError};
use tracing::{error, info};

use crate::config::DemoConfig;
use crate::report::{RunReport, Step};

/// Key of the single demo object
pub const OBJECT_KEY: &str = "CSE546test.txt";
/// Body of the single demo message
pub const MESSAGE_BODY: &str = "This is a test message";
/// Title attribute carried by the demo message
pub const MESSAGE_TITLE: &str = "test message";

type CheckError = Box<dyn std::error::Error + Send + Sync>;

/// Derives the run's bucket name from the prefix and a creation timestamp
#[must_use]
pub fn demo_bucket_name(prefix: &str, created_at: DateTime<Utc>) -> String {
    format!("{prefix}-{}", created_at.timestamp_millis())
}

/// The demo workflow, holding the three service clients and the run config
pub struct DemoWorkflow {
    compute: ComputeClient,
    bucket: BucketClient,
    queue: QueueClient,
    config: DemoConfig,
}

impl DemoWorkflow {
    /// Builds the workflow from a shared SDK configuration
    #[must_use]
    pub fn new(sdk_config: &SdkConfig, config: DemoConfig) -> Self {
        Self {
            compute: ComputeClient::new(sdk_config),
            bucket: BucketClient::new(sdk_config),
            queue: QueueClient::new(sdk_config),
            config,
        }
    }

    /// Runs the workflow end to end and returns the aggregated report
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::default();
        let bucket_name = demo_bucket_name(&self.config.bucket_prefix, Utc::now());

        // Creation phase: three independent calls, failures do not stop the run
        let spec = LaunchSpec {
            image_id: self.config.image_id.clone(),
            instance_type: self.config.instance_type.clone(),
        };
        let instance_id = match self.compute.launch_instance(&spec).await {
            Ok(id) => {
                report.record_success(Step::CreateInstance, id.clone());
                Some(id)
            }
            Err(e) => {
                error!("Error creating instance: {e}");
                report.record_failure(Step::CreateInstance, e);
                None
            }
        };

        let bucket_created = match self.bucket.create_bucket(&bucket_name).await {
            Ok(()) => {
                report.record_success(Step::CreateBucket, bucket_name.clone());
                true
            }
            Err(e) => {
                error!("Error creating bucket: {e}");
                report.record_failure(Step::CreateBucket, e);
                false
            }
        };

        let queue_url = match self.queue.create_queue(&self.config.queue_name).await {
            Ok(url) => {
                report.record_success(Step::CreateQueue, url.clone());
                Some(url)
            }
            Err(e) => {
                error!("Error creating queue: {e}");
                report.record_failure(Step::CreateQueue, e);
                None
            }
        };

        // Settle phase: poll instead of sleeping a fixed 3 seconds
        info!("Waiting for created resources to become visible");
        match self
            .wait_until_visible(
                instance_id.as_deref(),
                bucket_created.then_some(bucket_name.as_str()),
                queue_url.as_deref(),
            )
            .await
        {
            Ok(()) => report.record_success(Step::SettleWait, "resources visible"),
            Err(e) => {
                error!("Created resources did not settle: {e}");
                report.record_failure(Step::SettleWait, e);
            }
        }

        match self.enumerate_resources().await {
            Ok(detail) => report.record_success(Step::EnumerateResources, detail),
            Err(e) => report.record_failure(Step::EnumerateResources, e),
        }

        match self.bucket.put_empty_object(&bucket_name, OBJECT_KEY).await {
            Ok(()) => report.record_success(
                Step::UploadObject,
                format!("{OBJECT_KEY} -> {bucket_name}"),
            ),
            Err(e) => {
                error!("Error uploading object: {e}");
                report.record_failure(Step::UploadObject, e);
            }
        }

        match self.resolve_queue_url(queue_url).await {
            Some(url) => match self.queue_exercise(&url).await {
                Ok(detail) => report.record_success(Step::QueueExercise, detail),
                Err(e) => {
                    error!("Error exercising queue: {e}");
                    report.record_failure(Step::QueueExercise, e);
                }
            },
            None => report.record_failure(Step::QueueExercise, "queue URL could not be resolved"),
        }

        self.teardown(&mut report).await;

        report
    }

    /// Polls until each successfully created resource shows up in its
    /// enumeration
    async fn wait_until_visible(
        &self,
        instance_id: Option<&str>,
        bucket_name: Option<&str>,
        queue_url: Option<&str>,
    ) -> Result<(), WaitError<CheckError>> {
        let compute = &self.compute;
        let bucket = &self.bucket;
        let queue = &self.queue;

        poll_until(self.config.poll_interval, self.config.settle_timeout, move || {
            let instance_id = instance_id.map(str::to_string);
            let bucket_name = bucket_name.map(str::to_string);
            let queue_url = queue_url.map(str::to_string);

            async move {
                if let Some(id) = instance_id {
                    let instances = compute.list_instances().await?;
                    if !instances.iter().any(|summary| summary.id == id) {
                        return Ok::<bool, CheckError>(false);
                    }
                }

                if let Some(name) = bucket_name {
                    let buckets = bucket.list_buckets().await?;
                    if !buckets.iter().any(|existing| *existing == name) {
                        return Ok(false);
                    }
                }

                if let Some(url) = queue_url {
                    let queues = queue.list_queues().await?;
                    if !queues.iter().any(|existing| *existing == url) {
                        return Ok(false);
                    }
                }

                Ok(true)
            }
        })
        .await
    }

    /// Lists all three resource kinds, logging attributes per entry
    ///
    /// A failure for one kind is logged and does not stop the others; the
    /// step fails if any kind could not be listed.
    async fn enumerate_resources(&self) -> Result<String, String> {
        let mut failures = Vec::new();
        let mut counts = (0usize, 0usize, 0usize);

        match self.compute.list_instances().await {
            Ok(instances) => {
                counts.0 = instances.len();
                info!("Instances information:");
                for instance in &instances {
                    info!("- Instance ID: {}", instance.id);
                    info!("  State: {}", instance.state);
                    info!("  Instance Type: {}", instance.instance_type);
                    match instance.launch_time {
                        Some(launch_time) => info!("  Launch Time: {launch_time}"),
                        None => info!("  Launch Time: unknown"),
                    }
                }
            }
            Err(e) => {
                error!("Error retrieving instances: {e}");
                failures.push(format!("instances: {e}"));
            }
        }

        match self.bucket.list_buckets().await {
            Ok(buckets) => {
                counts.1 = buckets.len();
                info!("Buckets information:");
                for bucket in &buckets {
                    info!("- Bucket Name: {bucket}");
                }
            }
            Err(e) => {
                error!("Error retrieving buckets: {e}");
                failures.push(format!("buckets: {e}"));
            }
        }

        match self.queue.list_queues().await {
            Ok(queue_urls) => {
                counts.2 = queue_urls.len();
                info!("Queues information:");
                for queue_url in &queue_urls {
                    info!("- Queue URL: {queue_url}");
                }
            }
            Err(e) => {
                error!("Error retrieving queues: {e}");
                failures.push(format!("queues: {e}"));
            }
        }

        if failures.is_empty() {
            Ok(format!(
                "{} instances, {} buckets, {} queues",
                counts.0, counts.1, counts.2
            ))
        } else {
            Err(failures.join("; "))
        }
    }

    /// Falls back to a list lookup when creation did not return a queue URL
    async fn resolve_queue_url(&self, created: Option<String>) -> Option<String> {
        if created.is_some() {
            return created;
        }

        let suffix = format!("/{}", self.config.queue_name);
        match self.queue.list_queues().await {
            Ok(queue_urls) => queue_urls.into_iter().find(|url| url.ends_with(&suffix)),
            Err(e) => {
                error!("Failed to look up queue URL: {e}");
                None
            }
        }
    }

    /// Send one message, read the approximate depth, long-poll a receive,
    /// read the depth again
    async fn queue_exercise(&self, queue_url: &str) -> cloud_resources::queue::QueueResult<String> {
        let message_id = self
            .queue
            .send_text_message(queue_url, MESSAGE_BODY, MESSAGE_TITLE)
            .await?;
        info!("Message sent successfully: {message_id}");

        let depth_before = self.queue.approximate_depth(queue_url).await?;
        info!("Number of messages in the queue: {depth_before}");

        let messages = self.queue.receive_messages(queue_url).await?;
        if messages.is_empty() {
            info!("No messages available");
        }
        for message in &messages {
            match &message.title {
                Some(title) => {
                    info!("Message Title: {title}");
                    info!("Message Body: {}", message.body);
                }
                None => info!("No message title found"),
            }
        }

        let depth_after = self.queue.approximate_depth(queue_url).await?;
        info!("Number of messages in the queue: {depth_after}");

        Ok(format!(
            "sent {message_id}; received {}; depth {depth_before} -> {depth_after}",
            messages.len()
        ))
    }

    /// Tears everything down, waits for the fleet to drain, then enumerates
    /// what remains
    async fn teardown(&self, report: &mut RunReport) {
        info!("Deleting all instances");
        match self.compute.terminate_all().await {
            Ok(instance_ids) => report.record_success(
                Step::TerminateInstances,
                format!("terminated {} instances", instance_ids.len()),
            ),
            Err(e) => {
                error!("Error terminating instances: {e}");
                report.record_failure(Step::TerminateInstances, e);
            }
        }

        info!("Deleting all buckets");
        match self.bucket.delete_all_buckets().await {
            Ok(buckets) => report.record_success(
                Step::DeleteBuckets,
                format!("deleted {} buckets", buckets.len()),
            ),
            Err(e) => {
                error!("Error deleting buckets: {e}");
                report.record_failure(Step::DeleteBuckets, e);
            }
        }

        info!("Deleting all queues");
        match self.queue.delete_all_queues().await {
            Ok(queue_urls) => report.record_success(
                Step::DeleteQueues,
                format!("deleted {} queues", queue_urls.len()),
            ),
            Err(e) => {
                error!("Error deleting queues: {e}");
                report.record_failure(Step::DeleteQueues, e);
            }
        }

        // Drain phase: poll instead of sleeping a fixed 20 seconds
        info!("Waiting for torn-down resources to disappear");
        match self.wait_until_drained().await {
            Ok(()) => report.record_success(Step::DrainWait, "all resources drained"),
            Err(e) => {
                error!("Resources did not drain: {e}");
                report.record_failure(Step::DrainWait, e);
            }
        }

        info!("Show remaining resources");
        match self.enumerate_resources().await {
            Ok(detail) => report.record_success(Step::FinalEnumeration, detail),
            Err(e) => report.record_failure(Step::FinalEnumeration, e),
        }
    }

    /// Polls until no live instance, bucket, or queue remains observable
    async fn wait_until_drained(&self) -> Result<(), WaitError<CheckError>> {
        let compute = &self.compute;
        let bucket = &self.bucket;
        let queue = &self.queue;

        poll_until(
            self.config.poll_interval,
            self.config.teardown_timeout,
            move || async move {
                let instances = compute.list_instances().await?;
                if instances.iter().any(|summary| !summary.is_terminated()) {
                    return Ok::<bool, CheckError>(false);
                }

                let buckets = bucket.list_buckets().await?;
                if !buckets.is_empty() {
                    return Ok(false);
                }

                let queues = queue.list_queues().await?;
                Ok(queues.is_empty())
            },
        )
        .await
    }
}
