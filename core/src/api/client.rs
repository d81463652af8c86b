//! Resource client trait and the reqwest-backed implementation

use crate::config::ClientConfig;
use crate::error::{ConfigError, RequestError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use super::method::Method;

/// Opaque JSON payload returned by the API
pub type Resource = Value;

/// Trait for clients that views fetch their resources through
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Issue a request against `path`, relative to the configured base address
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Resource>;

    /// Fetch the resource at `path`
    async fn get(&self, path: &str) -> Result<Resource> {
        self.request(Method::Get, path, None).await
    }

    /// Create a resource at `path`
    async fn post(&self, path: &str, body: &Value) -> Result<Resource> {
        self.request(Method::Post, path, Some(body)).await
    }

    /// Replace the resource at `path`
    async fn put(&self, path: &str, body: &Value) -> Result<Resource> {
        self.request(Method::Put, path, Some(body)).await
    }

    /// Delete the resource at `path`
    async fn delete(&self, path: &str) -> Result<Resource> {
        self.request(Method::Delete, path, None).await
    }
}

/// Configuration after validation, with headers ready to attach
#[derive(Debug)]
struct Settings {
    config: ClientConfig,
    headers: HeaderMap,
}

impl Settings {
    fn build(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidValue {
                    field: format!("headers.{}", name),
                    value: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidValue {
                    field: format!("headers.{}", name),
                    value: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        if let Some(credential) = &config.credential {
            let mut value = HeaderValue::from_str(&credential.authorization()).map_err(|_| {
                ConfigError::InvalidValue {
                    field: "credential".to_string(),
                    value: "contains characters not allowed in a header".to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self { config, headers })
    }

    /// Join the base address and a request path with exactly one slash
    fn url_for(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// The shared, preconfigured HTTP client
///
/// A client starts unconfigured. [`ApiClient::configure`] installs its
/// settings exactly once; every request made before that fails with
/// [`ConfigError::NotConfigured`] without touching the network. Share the
/// client between views as an `Arc<ApiClient>`.
#[derive(Debug, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    settings: OnceLock<Settings>,
}

impl ApiClient {
    /// Create a new, unconfigured client
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            settings: OnceLock::new(),
        }
    }

    /// Create a client and configure it in one step
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Self::new();
        client.configure(config)?;
        Ok(client)
    }

    /// Install the client configuration
    ///
    /// Can only succeed once per client.
    pub fn configure(&self, config: ClientConfig) -> Result<()> {
        if self.settings.get().is_some() {
            return Err(ConfigError::AlreadyConfigured.into());
        }

        let settings = Settings::build(config)?;
        info!(
            base_url = %settings.config.base_url,
            auth = settings.config.credential.as_ref().map(|c| c.scheme()).unwrap_or("none"),
            "API client configured"
        );

        self.settings
            .set(settings)
            .map_err(|_| ConfigError::AlreadyConfigured.into())
    }

    /// Whether `configure` has been called successfully
    pub fn is_configured(&self) -> bool {
        self.settings.get().is_some()
    }

    /// The active configuration, if any
    pub fn config(&self) -> Option<&ClientConfig> {
        self.settings.get().map(|s| &s.config)
    }

    fn settings(&self) -> std::result::Result<&Settings, ConfigError> {
        self.settings.get().ok_or(ConfigError::NotConfigured)
    }

    /// Build the outgoing request without sending it
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Request> {
        let settings = self.settings()?;
        let url = settings.url_for(path);

        let mut builder = self
            .http
            .request(method.into(), &url)
            .headers(settings.headers.clone());

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        if let Some(timeout) = settings.config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl ResourceClient for ApiClient {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Resource> {
        let request = self.prepare(method, path, body)?;
        let url = request.url().to_string();
        debug!(%method, %url, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else {
                e.to_string()
            };
            warn!(%method, %url, error = %message, "Request failed");
            RequestError::Transport {
                url: url.clone(),
                message,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%method, %url, status = status.as_u16(), "Request rejected");
            return Err(RequestError::Status {
                method: method.to_string(),
                url,
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RequestError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;
        debug!(%method, %url, status = status.as_u16(), bytes = bytes.len(), "Response received");

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            RequestError::Decode {
                url,
                message: e.to_string(),
            }
            .into()
        })
    }
}
