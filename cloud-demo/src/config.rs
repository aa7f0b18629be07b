//! CLI arguments and the explicit run configuration
//!
//! Everything tunable about a run is resolved once at startup and passed
//! down as a `DemoConfig`; nothing is read from globals mid-run.

use std::time::Duration;

use clap::Parser;

/// Command-line arguments for the demo
#[derive(Parser, Debug)]
#[command(name = "cloud-demo", about = "Provision, exercise, and tear down demo cloud resources")]
pub struct DemoArgs {
    /// Provider region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Endpoint override, e.g. a LocalStack URL
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Prefix for the generated bucket name
    #[arg(long, default_value = "bucket1")]
    pub bucket_prefix: String,

    /// Name of the demo queue
    #[arg(long, default_value = "queue1")]
    pub queue_name: String,

    /// Machine image for the demo instance
    #[arg(long, default_value = "ami-014d544cfef21b42d")]
    pub image_id: String,

    /// Instance type for the demo instance
    #[arg(long, default_value = "t2.micro")]
    pub instance_type: String,

    /// Deadline for resources to become visible after creation, in seconds
    #[arg(long, default_value_t = 30)]
    pub settle_timeout_secs: u64,

    /// Deadline for resources to disappear after teardown, in seconds
    #[arg(long, default_value_t = 60)]
    pub teardown_timeout_secs: u64,

    /// Interval between state polls, in seconds
    #[arg(long, default_value_t = 2)]
    pub poll_interval_secs: u64,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Resolved configuration for one demo run
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Provider region
    pub region: String,
    /// Endpoint override, when targeting LocalStack
    pub endpoint_url: Option<String>,
    /// Prefix for the generated bucket name
    pub bucket_prefix: String,
    /// Name of the demo queue
    pub queue_name: String,
    /// Machine image for the demo instance
    pub image_id: String,
    /// Instance type for the demo instance
    pub instance_type: String,
    /// Deadline for resources to become visible after creation
    pub settle_timeout: Duration,
    /// Deadline for resources to disappear after teardown
    pub teardown_timeout: Duration,
    /// Interval between state polls
    pub poll_interval: Duration,
    /// Whether to print the run report as JSON
    pub json: bool,
}

impl From<DemoArgs> for DemoConfig {
    fn from(args: DemoArgs) -> Self {
        Self {
            region: args.region,
            endpoint_url: args.endpoint_url,
            bucket_prefix: args.bucket_prefix,
            queue_name: args.queue_name,
            image_id: args.image_id,
            instance_type: args.instance_type,
            settle_timeout: Duration::from_secs(args.settle_timeout_secs),
            teardown_timeout: Duration::from_secs(args.teardown_timeout_secs),
            poll_interval: Duration::from_secs(args.poll_interval_secs),
            json: args.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn defaults_match_the_demo_fixtures() {
        std::env::remove_var("AWS_REGION");
        std::env::remove_var("AWS_ENDPOINT_URL");

        let config = DemoConfig::from(DemoArgs::parse_from(["cloud-demo"]));

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.bucket_prefix, "bucket1");
        assert_eq!(config.queue_name, "queue1");
        assert_eq!(config.image_id, "ami-014d544cfef21b42d");
        assert_eq!(config.instance_type, "t2.micro");
        assert_eq!(config.settle_timeout, Duration::from_secs(30));
        assert_eq!(config.teardown_timeout, Duration::from_secs(60));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert!(!config.json);
    }

    #[test]
    #[serial]
    fn endpoint_override_comes_from_flag_or_env() {
        std::env::remove_var("AWS_ENDPOINT_URL");

        let config = DemoConfig::from(DemoArgs::parse_from([
            "cloud-demo",
            "--endpoint-url",
            "http://localhost:4566",
        ]));
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );

        std::env::set_var("AWS_ENDPOINT_URL", "http://localstack:4566");
        let config = DemoConfig::from(DemoArgs::parse_from(["cloud-demo"]));
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localstack:4566")
        );
        std::env::remove_var("AWS_ENDPOINT_URL");
    }
}
