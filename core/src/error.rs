//! Error types and handling for atlas core

use thiserror::Error;

/// Result type alias for atlas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for atlas core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed resource requests
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// Route table and navigation errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP errors raised while building a request
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("API client used before configure() was called")]
    NotConfigured,

    #[error("API client is already configured; create a new client to change settings")]
    AlreadyConfigured,
}

/// Errors from issuing a resource request
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{method} {url} returned {status}: {message}")]
    Status {
        method: String,
        url: String,
        status: u16,
        message: String,
    },

    #[error("Network error on {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl RequestError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Route table and navigation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Route path '{0}' must be absolute (start with '/')")]
    InvalidPath(String),

    #[error("Route path '{0}' is registered more than once")]
    DuplicatePath(String),

    #[error("No routes configured")]
    NoRoutes,
}
