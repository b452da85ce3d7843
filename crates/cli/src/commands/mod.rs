//! CLI commands

pub mod auth;
pub mod browse;
pub mod buy;
pub mod content;
pub mod feedback;

use anyhow::Result;
use psyche_core::StorefrontConfig;

use crate::Cli;

/// Loads the user config and applies CLI overrides.
pub fn load_config(cli: &Cli) -> Result<StorefrontConfig> {
    let mut config = StorefrontConfig::load()?;
    if let Some(ref api) = cli.api {
        config.api_base = api.trim_end_matches('/').to_string();
    }
    Ok(config)
}
