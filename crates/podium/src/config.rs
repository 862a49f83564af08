//! Configuration file for podium.
//!
//! ```toml
//! database = "scores.db"
//! api_secret = "change-me"
//! format = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::export::OutputFormat;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PodiumConfig {
    /// SQLite database holding the `scores` table
    pub database: PathBuf,
    /// Shared secret for authenticated requests
    pub api_secret: Option<String>,
    /// Output format for query results
    pub format: OutputFormat,
}

impl Default for PodiumConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("scores.db"),
            api_secret: None,
            format: OutputFormat::Text,
        }
    }
}

impl PodiumConfig {
    /// Create a new configuration builder
    pub fn builder() -> PodiumConfigBuilder {
        PodiumConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: PodiumConfig = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Builder for PodiumConfig
#[derive(Debug, Clone, Default)]
pub struct PodiumConfigBuilder {
    database: Option<PathBuf>,
    api_secret: Option<String>,
    format: Option<OutputFormat>,
}

impl PodiumConfigBuilder {
    /// Start from an existing configuration, e.g. one loaded from file
    pub fn from_config(config: PodiumConfig) -> Self {
        Self {
            database: Some(config.database),
            api_secret: config.api_secret,
            format: Some(config.format),
        }
    }

    /// Set the database path
    pub fn database<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database = Some(path.into());
        self
    }

    /// Set the API secret
    pub fn api_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.api_secret = Some(secret.into());
        self
    }

    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Build the configuration
    pub fn build(self) -> PodiumConfig {
        let default = PodiumConfig::default();
        PodiumConfig {
            database: self.database.unwrap_or(default.database),
            api_secret: self.api_secret.or(default.api_secret),
            format: self.format.unwrap_or(default.format),
        }
    }
}
