//! CLI command implementations

pub mod browse;
pub mod open;
pub mod request;
pub mod routes;

pub use browse::browse_command;
pub use open::open_command;
pub use request::request_command;
pub use routes::routes_command;

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use atlas_core::ApiClient;
use std::sync::Arc;

/// Load configuration and build the shared client
async fn connect(loader: &CliConfigLoader) -> Result<Arc<ApiClient>> {
    let config = loader.load().await.context("Failed to load configuration")?;
    let client = ApiClient::with_config(config).context("Failed to configure API client")?;
    Ok(Arc::new(client))
}
