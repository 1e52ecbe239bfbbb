//! # Site Configuration
//!
//! Settings for the portfolio server, read from `.folio/config.json` and then
//! overridden by `FOLIO_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::theme::ThemeMode;

/// Directory holding the persisted configuration, relative to the working dir
pub const CONFIG_DIR: &str = ".folio";

/// File name of the persisted configuration inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.json";

/// Environment variables consulted by [`SiteConfig::apply_env`]
pub const ENV_PORT: &str = "FOLIO_PORT";
pub const ENV_CONTACT_ENDPOINT: &str = "FOLIO_CONTACT_ENDPOINT";
pub const ENV_LOADING_DELAY_MS: &str = "FOLIO_LOADING_DELAY_MS";
pub const ENV_REVEAL_INTERVAL_MS: &str = "FOLIO_REVEAL_INTERVAL_MS";
pub const ENV_DEFAULT_THEME: &str = "FOLIO_DEFAULT_THEME";

/// Effective site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Port the server listens on
    pub port: u16,
    /// External endpoint receiving contact messages
    pub contact_endpoint: String,
    /// How long the loading gate stays closed after mount
    pub loading_delay_ms: u64,
    /// Delay between two characters of the hero role text
    pub reveal_interval_ms: u64,
    /// Theme used when the visitor has no stored preference
    pub default_theme: ThemeMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            contact_endpoint: "http://localhost:5000/contact".to_string(),
            loading_delay_ms: 1000,
            reveal_interval_ms: 100,
            default_theme: ThemeMode::Light,
        }
    }
}

/// On-disk layer: every field optional, missing ones keep the defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loading_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reveal_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_theme: Option<ThemeMode>,
}

impl SiteConfig {
    /// Path of the config file under `root`
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load `<root>/.folio/config.json` on top of the defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub async fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(root);
        let mut config = Self::default();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(config);
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        let persisted: PersistedConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        config.merge(persisted);
        tracing::info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    fn merge(&mut self, other: PersistedConfig) {
        if let Some(port) = other.port {
            self.port = port;
        }
        if let Some(endpoint) = other.contact_endpoint {
            self.contact_endpoint = endpoint;
        }
        if let Some(delay) = other.loading_delay_ms {
            self.loading_delay_ms = delay;
        }
        if let Some(interval) = other.reveal_interval_ms {
            self.reveal_interval_ms = interval;
        }
        if let Some(theme) = other.default_theme {
            self.default_theme = theme;
        }
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from any key/value source (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PORT) {
            self.port = parse_env(ENV_PORT, value)?;
        }
        if let Some(value) = lookup(ENV_CONTACT_ENDPOINT) {
            self.contact_endpoint = value;
        }
        if let Some(value) = lookup(ENV_LOADING_DELAY_MS) {
            self.loading_delay_ms = parse_env(ENV_LOADING_DELAY_MS, value)?;
        }
        if let Some(value) = lookup(ENV_REVEAL_INTERVAL_MS) {
            self.reveal_interval_ms = parse_env(ENV_REVEAL_INTERVAL_MS, value)?;
        }
        if let Some(value) = lookup(ENV_DEFAULT_THEME) {
            self.default_theme = ThemeMode::parse(&value).ok_or(ConfigError::InvalidEnv {
                key: ENV_DEFAULT_THEME,
                value,
            })?;
        }
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}
