//! Configuration types for the shared API client
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Headers every request carries unless explicitly overridden
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// Authentication material attached to every request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Credential {
    /// HTTP basic authentication with an identifier/secret pair
    Basic { identifier: String, secret: String },
    /// Token issued by a backend session
    Bearer { token: String },
}

impl Credential {
    /// Create a basic credential
    pub fn basic(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Credential::Basic {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Create a bearer credential
    pub fn bearer(token: impl Into<String>) -> Self {
        Credential::Bearer {
            token: token.into(),
        }
    }

    /// Name of the authentication scheme
    pub fn scheme(&self) -> &'static str {
        match self {
            Credential::Basic { .. } => "basic",
            Credential::Bearer { .. } => "bearer",
        }
    }

    /// Value for the `Authorization` header
    pub fn authorization(&self) -> String {
        match self {
            Credential::Basic { identifier, secret } => {
                format!("Basic {}", STANDARD.encode(format!("{identifier}:{secret}")))
            }
            Credential::Bearer { token } => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Basic { identifier, .. } => f
                .debug_struct("Basic")
                .field("identifier", identifier)
                .field("secret", &"<redacted>")
                .finish(),
            Credential::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// A fully resolved client configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base address every request path is appended to
    pub base_url: String,
    /// Headers attached to every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Optional authentication material
    #[serde(default)]
    pub credential: Option<Credential>,
    /// Optional per-request timeout; requests never time out when unset
    #[serde(default)]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new config with the JSON default headers
    pub fn new(base_url: impl Into<String>) -> Self {
        let headers = DEFAULT_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self {
            base_url: base_url.into(),
            headers,
            credential: None,
            timeout: None,
        }
    }

    /// Set the credential
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Add a header, replacing any existing value for the same name
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    /// Add multiple headers
    pub fn with_headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        for (name, value) in headers {
            self = self.with_header(name, value);
        }
        self
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "base_url".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                value: format!("{} (must start with http:// or https://)", self.base_url),
            });
        }

        url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: format!("{}: {}", self.base_url, e),
        })?;

        if self.headers.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "headers".to_string(),
                value: "header names cannot be empty".to_string(),
            });
        }

        match &self.credential {
            Some(Credential::Basic { identifier, .. }) if identifier.is_empty() => {
                return Err(ConfigError::MissingField {
                    field: "credential.identifier".to_string(),
                });
            }
            Some(Credential::Bearer { token }) if token.is_empty() => {
                return Err(ConfigError::MissingField {
                    field: "credential.token".to_string(),
                });
            }
            _ => {}
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue {
                field: "timeout".to_string(),
                value: "0s".to_string(),
            });
        }

        Ok(())
    }
}
