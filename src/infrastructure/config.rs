// src/infrastructure/config.rs
use crate::application::GenerationMode;
use crate::constants::DELETE_CONFIRM_TIMEOUT_MS;
use crate::domain::SortCriterion;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// TOML configuration for studynotes
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ViewConfig {
    #[serde(default)]
    pub default_sort: SortCriterion,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CardConfig {
    #[serde(default = "default_delete_confirm_ms")]
    pub delete_confirm_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct GenerationConfig {
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default)]
    pub recursive: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ClipboardConfig {
    /// Copy program plus arguments; empty means auto-detect.
    #[serde(default)]
    pub program: String,
}

fn default_delete_confirm_ms() -> u64 { DELETE_CONFIRM_TIMEOUT_MS }

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            delete_confirm_ms: default_delete_confirm_ms(),
        }
    }
}

impl CardConfig {
    pub fn confirm_window(&self) -> Duration {
        Duration::from_millis(self.delete_confirm_ms)
    }
}

impl ClipboardConfig {
    pub fn program(&self) -> Option<&str> {
        Some(self.program.trim()).filter(|p| !p.is_empty())
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

/// `<config dir>/studynotes/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("studynotes").join("config.toml"))
}
