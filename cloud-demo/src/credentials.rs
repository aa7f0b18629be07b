//! Credential resolution and SDK configuration
//!
//! The access key pair comes from the environment when present, otherwise
//! from two interactive prompts. The pair lives only inside the SDK
//! configuration built here.

use std::io::{BufRead, Write};

use anyhow::Context;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use tracing::debug;

use crate::config::DemoConfig;

const ACCESS_KEY_ENV: &str = "AWS_ACCESS_KEY_ID";
const SECRET_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";

/// Resolves the access key pair from the environment or interactive prompts
///
/// # Errors
///
/// Returns an error when reading from the terminal fails
pub fn resolve_credentials() -> anyhow::Result<Credentials> {
    if let (Ok(access_key_id), Ok(secret_access_key)) =
        (std::env::var(ACCESS_KEY_ENV), std::env::var(SECRET_KEY_ENV))
    {
        debug!("Using credentials from environment");
        return Ok(Credentials::from_keys(access_key_id, secret_access_key, None));
    }

    let access_key_id = prompt_line("Enter access key id: ")?;
    let secret_access_key = rpassword::prompt_password("Enter secret access key: ")
        .context("Failed to read secret access key")?;

    Ok(Credentials::from_keys(access_key_id, secret_access_key, None))
}

/// Builds the shared SDK configuration from the run config and credentials
pub async fn sdk_config(config: &DemoConfig, credentials: Credentials) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials);

    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = std::io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read access key id")?;

    Ok(line.trim().to_string())
}
