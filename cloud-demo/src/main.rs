use anyhow::bail;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cloud_demo::config::{DemoArgs, DemoConfig};
use cloud_demo::credentials;
use cloud_demo::workflow::DemoWorkflow;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DemoConfig::from(DemoArgs::parse());
    info!("Starting cloud demo in region {}", config.region);

    let aws_credentials = credentials::resolve_credentials()?;
    let sdk_config = credentials::sdk_config(&config, aws_credentials).await;

    let workflow = DemoWorkflow::new(&sdk_config, config.clone());
    let report = workflow.run().await;

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }

    let failed = report.failed_steps();
    if !failed.is_empty() {
        bail!(
            "{} of {} steps failed",
            failed.len(),
            report.outcomes().len()
        );
    }

    info!("Cloud demo finished");
    Ok(())
}
