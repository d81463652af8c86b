//! Route table listing command

use anyhow::Result;
use atlas_core::catalog_routes;
use tracing::info;

/// Show the route table
pub async fn routes_command() -> Result<()> {
    info!("Listing routes");

    for entry in catalog_routes().entries() {
        println!(
            "{:<12} {:<12} {}",
            entry.path,
            entry.display_name(),
            entry.description.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}
