//! # atlas CLI
//!
//! Command-line interface for atlas - browse the categories, countries and
//! languages lists served by the catalog API.
//!
//! ## Usage
//!
//! - `atlas` - Start an interactive session at /categories
//! - `atlas open /countries` - Open a single location
//! - `atlas request /languages` - Send a raw request and print the JSON
//! - `atlas routes` - Show the route table

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use commands::{browse_command, open_command, request_command, routes_command};
use config::CliConfigLoader;

/// atlas - browse the catalog API
#[derive(Parser)]
#[command(name = "atlas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the categories, countries and languages lists")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL override, e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Username override for basic authentication
    #[arg(long, global = true)]
    username: Option<String>,

    /// Session token override (sent as a bearer credential)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route table
    Routes,

    /// Open a location and print its view
    Open {
        /// Location to open, e.g. /countries
        path: String,
    },

    /// Send a raw request to the API
    Request {
        /// Request path, relative to the base URL
        path: String,

        /// HTTP method (GET, POST, PUT, DELETE)
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Start an interactive session
    Browse {
        /// Location to start at
        #[arg(default_value = "/categories")]
        start: String,

        /// Maximum number of history entries
        #[arg(long, default_value_t = 50)]
        max_history: usize,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(username) = &cli.username {
        loader = loader.with_username_override(username.clone());
    }

    if let Some(token) = &cli.token {
        loader = loader.with_token_override(token.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set
    if std::env::var_os("RUST_LOG").is_some() {
        atlas_core::init_tracing();
    } else {
        atlas_core::init_tracing_with_debug(cli.verbose);
    }

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes) => routes_command().await,
        Some(Commands::Open { path }) => open_command(path, config_loader).await,
        Some(Commands::Request { path, method, data }) => {
            request_command(method, path, data, config_loader).await
        }
        Some(Commands::Browse { start, max_history }) => {
            browse_command(start, max_history, config_loader).await
        }
        None => browse_command("/categories".to_string(), 50, config_loader).await,
    }
}
