//! Console Configuration
//!
//! Defaults, then an optional TOML file, then environment variables.
//! Command-line flags are applied last by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_URL: &str = "SCENARIO_CONSOLE_URL";
pub const ENV_TIMEOUT: &str = "SCENARIO_CONSOLE_TIMEOUT";
pub const ENV_LOG_DIR: &str = "SCENARIO_CONSOLE_LOG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Router prefix of the admin API
    pub api_prefix: String,
    pub timeout_secs: u64,
    pub log_dir: PathBuf,
    pub app_name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/admin".to_string(),
            timeout_secs: 15,
            log_dir: PathBuf::from("logs"),
            app_name: "ScenarioConsole".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load from an optional file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.base_url = url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT,
                value: timeout.clone(),
            })?;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `base_url` + `api_prefix`, without a trailing slash
    pub fn api_base(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }
}
