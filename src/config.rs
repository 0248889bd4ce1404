//! User configuration
//!
//! Read from `<config_dir>/devvault/config.toml`. Every field is optional; a missing
//! or unreadable file falls back to defaults so the vault always starts.

use crate::models::fixtures::DEMO_AUTHOR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name written into snippets saved from the editor
    pub author: String,
    /// Simulated latency of the AI search, in milliseconds
    pub search_delay_ms: u64,
    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: u64,
    /// syntect theme used for code previews
    pub syntax_theme: String,
    /// Page id opened at launch
    pub start_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: DEMO_AUTHOR.to_string(),
            search_delay_ms: 1500,
            toast_duration_ms: 3000,
            syntax_theme: "base16-mocha.dark".to_string(),
            start_page: "home".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content).context("Failed to parse config TOML")
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devvault").join("config.toml"))
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
