//! Raw request command

use super::connect;
use crate::config::CliConfigLoader;
use anyhow::{anyhow, Context, Result};
use atlas_core::{Method, ResourceClient};
use serde_json::Value;

/// Send a single request and print the decoded JSON body
pub async fn request_command(
    method: String,
    path: String,
    data: Option<String>,
    loader: CliConfigLoader,
) -> Result<()> {
    let method: Method = method.parse().map_err(|e: String| anyhow!(e))?;
    let body = data
        .map(|raw| serde_json::from_str::<Value>(&raw))
        .transpose()
        .context("--data must be valid JSON")?;

    let client = connect(&loader).await?;
    let resource = client.request(method, &path, body.as_ref()).await?;

    println!("{}", serde_json::to_string_pretty(&resource)?);
    Ok(())
}
