//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_LOADING_DELAY_MS: u64 = 2000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 1200;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How long the loading placeholder is shown
    pub loading_delay_ms: Option<u64>,
    /// How long a simulated submission takes
    pub submit_delay_ms: Option<u64>,
    /// How long the success toast stays up
    pub success_display_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms.unwrap_or(DEFAULT_LOADING_DELAY_MS))
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(
            self.success_display_ms
                .unwrap_or(DEFAULT_SUCCESS_DISPLAY_MS),
        )
    }
}
