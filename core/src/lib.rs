//! # atlas Core
//!
//! Core library for atlas - the navigation and data-access layer of the
//! categories / countries / languages catalog.
//!
//! This library provides the route table that maps locations to views,
//! the views themselves, and the shared API client every view fetches its
//! resource list through.

// Core modules
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod router;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, Method, Resource, ResourceClient};
pub use app::{catalog_routes, Navigator, PendingView, ViewRef};
pub use config::{ClientConfig, Credential};
pub use error::{Error, Result};
pub use router::{RouteEntry, RouteMatch, RouteTable, Router, RouterConfig, RouterState};
pub use views::{ResourceKind, ResourceListView, View, ViewOutcome};

/// Current version of the atlas-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
