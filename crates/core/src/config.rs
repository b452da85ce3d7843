//! Client configuration (~/.config/psyche/config.toml)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Connection settings for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the storefront API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Hosted checkout page for payments handled off-client.
    #[serde(default = "default_checkout_url")]
    pub checkout_url: String,

    /// Per-request timeout in seconds. Timeouts resolve through the same
    /// fallback paths as any other network failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://psyche.page/api".to_string()
}

fn default_checkout_url() -> String {
    "https://buy.stripe.com/psyche-library".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            checkout_url: default_checkout_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StorefrontConfig {
    /// Parses a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Loads `config.toml` from the user config dir, or defaults when absent.
    pub fn load() -> Result<Self> {
        match config_file() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Returns `~/.config/psyche/`, creating it if needed.
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("psyche");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.toml"))
}
