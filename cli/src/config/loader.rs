//! Simple CLI configuration loader for atlas
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./atlas.json or ./.atlas/config.json
//! 3. User config dir: $XDG_CONFIG_HOME/atlas/config.json or the platform equivalent
//! 4. Environment variables only (no files)
//!
//! Secrets are never compiled in. Any secret field may be written as
//! `env:VAR_NAME` to read it from the environment at startup.

use anyhow::{anyhow, bail, Context, Result};
use atlas_core::{ClientConfig, Credential};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Base address of the API, e.g. http://localhost:8000/api
    pub base_url: Option<String>,
    /// Identifier for basic authentication
    #[serde(default)]
    pub username: Option<String>,
    /// Secret for basic authentication (can be "env:VAR_NAME")
    #[serde(default)]
    pub password: Option<String>,
    /// Session token sent as a bearer credential (can be "env:VAR_NAME")
    #[serde(default)]
    pub token: Option<String>,
    /// Additional headers (optional)
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Request timeout in seconds (optional, no timeout when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    base_url_override: Option<String>,
    username_override: Option<String>,
    token_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set username override
    pub fn with_username_override(mut self, username: String) -> Self {
        self.username_override = Some(username);
        self
    }

    /// Set token override
    pub fn with_token_override(mut self, token: String) -> Self {
        self.token_override = Some(token);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ClientConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let expanded =
                PathBuf::from(shellexpand::tilde(&override_path.to_string_lossy()).into_owned());
            load_from_path(&expanded).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(username) = &self.username_override {
            config.username = Some(username.clone());
        }
        if let Some(token) = &self.token_override {
            config.token = Some(token.clone());
        }

        // Step 3: Resolve to final client config
        resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        let cwd = std::env::current_dir()?;
        let candidates = [
            Some(cwd.join("atlas.json")),
            Some(cwd.join(".atlas").join("config.json")),
            user_config_dir().map(|dir| dir.join("atlas").join("config.json")),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                debug!(path = %path.display(), "Using config file");
                return load_file(&path).await;
            }
        }

        self.load_env_only()
    }

    /// Build a raw config from ATLAS_* environment variables
    fn load_env_only(&self) -> Result<RawConfig> {
        let base_url = std::env::var("ATLAS_BASE_URL").ok();
        if base_url.is_none() && self.base_url_override.is_none() {
            bail!(
                "No configuration found. Create an atlas.json file, pass --base-url, \
                 or set ATLAS_BASE_URL"
            );
        }

        let timeout_secs = match std::env::var("ATLAS_TIMEOUT_SECS") {
            Ok(value) => Some(
                value
                    .parse::<u64>()
                    .with_context(|| format!("Invalid ATLAS_TIMEOUT_SECS: {}", value))?,
            ),
            Err(_) => None,
        };

        Ok(RawConfig {
            base_url,
            username: std::env::var("ATLAS_USERNAME").ok(),
            password: std::env::var("ATLAS_PASSWORD").ok(),
            token: std::env::var("ATLAS_TOKEN").ok(),
            headers: BTreeMap::new(),
            timeout_secs,
        })
    }
}

/// Platform config directory, preferring $XDG_CONFIG_HOME when set
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Load configuration from a specific path (file or directory)
async fn load_from_path(path: &Path) -> Result<RawConfig> {
    if path.is_file() {
        load_file(path).await
    } else if path.is_dir() {
        let config_file = path.join("config.json");
        if config_file.exists() {
            load_file(&config_file).await
        } else {
            Err(anyhow!(
                "No config.json found in directory: {}",
                path.display()
            ))
        }
    } else {
        Err(anyhow!("Config path does not exist: {}", path.display()))
    }
}

/// Load a single config file
async fn load_file(path: &Path) -> Result<RawConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve `env:VAR_NAME` indirection
fn resolve_secret(field: &str, value: String) -> Result<String> {
    match value.strip_prefix("env:") {
        Some(var_name) => std::env::var(var_name).with_context(|| {
            format!(
                "Environment variable not found: {} (referenced by {})",
                var_name, field
            )
        }),
        None => Ok(value),
    }
}

/// Resolve raw config to a validated ClientConfig
pub fn resolve_config(config: RawConfig) -> Result<ClientConfig> {
    let base_url = config
        .base_url
        .ok_or_else(|| anyhow!("Missing required field: base_url"))?;

    let token = config
        .token
        .map(|t| resolve_secret("token", t))
        .transpose()?;
    let password = config
        .password
        .map(|p| resolve_secret("password", p))
        .transpose()?;

    let credential = match (token, config.username, password) {
        (Some(token), _, _) => Some(Credential::bearer(token)),
        (None, Some(username), Some(password)) => Some(Credential::basic(username, password)),
        (None, Some(_), None) => bail!("A username was configured without a password"),
        (None, None, Some(_)) => bail!("A password was configured without a username"),
        (None, None, None) => None,
    };

    let mut resolved = ClientConfig::new(base_url).with_headers(config.headers);
    if let Some(credential) = credential {
        resolved = resolved.with_credential(credential);
    }
    if let Some(secs) = config.timeout_secs {
        resolved = resolved.with_timeout(Duration::from_secs(secs));
    }

    resolved
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(resolved)
}
