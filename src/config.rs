//! Client configuration
//!
//! Where the API lives, how to authenticate against it and a few display
//! preferences. Stored at `~/.config/todosync/config.toml`; environment
//! variables override the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::FilterValue;
use crate::paths;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://social-network.samuraijs.com/api/1.1/";

/// Environment variable overriding `api.base_url`
pub const ENV_BASE_URL: &str = "TODOSYNC_BASE_URL";

/// Environment variable overriding `api.api_key`
pub const ENV_API_KEY: &str = "TODOSYNC_API_KEY";

/// Global todosync configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the todo-lists API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `API-KEY` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Filter applied to task listings when none is given
    #[serde(default)]
    pub filter: FilterValue,
}

impl ClientConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `TODOSYNC_BASE_URL` / `TODOSYNC_API_KEY` from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup; empty values are ignored
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(key) = non_empty(ENV_API_KEY) {
            self.api.api_key = Some(key);
        }
        self
    }
}
