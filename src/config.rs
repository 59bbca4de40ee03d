use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::helper::{ClusterUrl, parse_cluster_url};

pub const CONFIG_PATH_ENV: &str = "CLUSTERPATH_CONFIG";
pub const SERVER_ENV: &str = "CLUSTERPATH_SERVER";

/// The workspace server URLs remembered between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl Config {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            previous: None,
        }
    }

    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let base = config_dir().context("Unable to resolve config directory")?;
        Ok(base.join("clusterpath").join("config.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_json::from_str(&data)
            .with_context(|| format!("Invalid config format: {}", path.display()))?;
        Ok(config)
    }

    /// A server given through the environment takes precedence over the
    /// stored one.
    pub fn from_env() -> Option<Self> {
        env::var(SERVER_ENV)
            .ok()
            .filter(|server| !server.trim().is_empty())
            .map(|server| Config::new(server.trim()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, perms)
                .with_context(|| format!("Failed to set permissions: {}", path.display()))?;
        }
        Ok(())
    }

    pub fn exists() -> Result<bool> {
        Ok(Self::path()?.exists())
    }

    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete config: {}", path.display()))?;
        }
        Ok(())
    }

    pub fn cluster_url(&self) -> Result<ClusterUrl> {
        parse_cluster_url(&self.server)
            .with_context(|| format!("Stored server {} is not a workspace URL", self.server))
    }

    pub fn previous_cluster_url(&self) -> Result<Option<ClusterUrl>> {
        self.previous
            .as_deref()
            .map(parse_cluster_url)
            .transpose()
            .context("Stored previous server is not a workspace URL")
    }

    /// Moves to `server`, remembering the current one as previous.
    pub fn switch_to(&self, server: String) -> Self {
        Self {
            server,
            previous: Some(self.server.clone()),
        }
    }
}
