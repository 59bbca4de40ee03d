use anyhow::{Context, Result};
use clusterpath::config::Config;

#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub quiet: bool,
    pub verbose: u8,
    pub dry_run: bool,
}

/// The environment wins over the stored config file.
pub fn load_config() -> Result<Config> {
    if let Some(config) = Config::from_env() {
        tracing::debug!(server = %config.server, "using server from environment");
        return Ok(config);
    }
    if !Config::exists()? {
        return Err(anyhow::anyhow!(
            "No workspace configured. Run clusterpath ws set <URL>"
        ));
    }
    Config::load().context("Failed to load config")
}
