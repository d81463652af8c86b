//! Shared HTTP client for the catalog API

pub mod client;
pub mod method;

pub use client::{ApiClient, Resource, ResourceClient};
pub use method::Method;
