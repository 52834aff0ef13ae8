use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shipbook_booking::catalog::DEFAULT_SUGGESTED_COUNT;
use shipbook_directory::api::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT};
use std::path::Path;
use std::time::Duration;

pub const DIRECTORY_URL_ENV: &str = "SHIPBOOK_DIRECTORY_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub directory: DirectoryConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub connect_timeout_seconds: u64,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub suggested_count: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT.as_secs(),
            timeout_seconds: None,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            suggested_count: DEFAULT_SUGGESTED_COUNT,
        }
    }
}

impl DirectoryConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn load_or_default(path: &Path) -> Self {
        let mut config = if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Falling back to default config: {e:#}");
                Self::default()
            })
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(DIRECTORY_URL_ENV) {
            if !url.trim().is_empty() {
                self.directory.base_url = url.trim().to_string();
            }
        }
    }
}
