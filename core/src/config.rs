use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ApiError, Result};

/// One authenticated API session: endpoint plus basic-auth credentials.
///
/// Built once by the caller and handed to [`crate::catalog::HttpCatalog`];
/// nothing in this crate holds a process-wide session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. "https://cloud.example.com/api"
    pub endpoint: String,

    /// Basic-auth username
    pub username: String,

    /// Basic-auth password
    pub password: String,
}

impl ApiConfig {
    /// Return the default config file path (~/.abiq/config.json).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".abiq"))
            .unwrap_or_else(|| PathBuf::from(".abiq"))
            .join("config.json")
    }

    /// Load a session configuration.
    ///
    /// Order: an explicit file if given, then the `ABIQ_ENDPOINT` /
    /// `ABIQ_USERNAME` / `ABIQ_PASSWORD` environment variables, then the
    /// default config file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Some(config) = Self::from_env() {
            return Ok(config);
        }

        let default = Self::default_path();
        if default.exists() {
            return Self::from_file(&default);
        }

        Err(ApiError::Config(
            "no session configured; run `abiq login` or set ABIQ_ENDPOINT, \
             ABIQ_USERNAME and ABIQ_PASSWORD"
                .to_string(),
        ))
    }

    /// Read a session configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Build a session from the `ABIQ_*` environment variables, if all
    /// three are set.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("ABIQ_ENDPOINT").ok()?;
        let username = std::env::var("ABIQ_USERNAME").ok()?;
        let password = std::env::var("ABIQ_PASSWORD").ok()?;
        Some(Self {
            endpoint,
            username,
            password,
        })
    }

    /// Persist the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Endpoint with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
