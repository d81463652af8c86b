//! Open a single location and print the resulting view

use super::connect;
use crate::config::CliConfigLoader;
use anyhow::{bail, Result};
use atlas_core::{Navigator, RouterConfig};

/// Navigate to `path` once and render whatever the view settles into
pub async fn open_command(path: String, loader: CliConfigLoader) -> Result<()> {
    let client = connect(&loader).await?;
    let mut navigator = Navigator::catalog(client, RouterConfig::default())?;

    let outcome = navigator.start(&path).outcome().await;
    println!("{}", outcome.render());

    if outcome.is_error() {
        bail!("Could not open {}", path);
    }
    Ok(())
}
