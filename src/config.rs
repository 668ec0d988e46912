//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! showcase-config.toml file: the rotation period, where the case-study
//! content lives, and how wide the terminal card is drawn.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "showcase-config.toml";

/// Application configuration loaded from showcase-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Rotation timing
    pub rotation: RotationConfig,
    /// Where the case studies come from
    #[serde(default)]
    pub content: ContentConfig,
    /// Terminal output
    pub display: DisplayConfig,
}

/// Rotation timing configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RotationConfig {
    /// Milliseconds between automatic advances; 0 is rejected when the
    /// showcase is mounted
    pub period_ms: u64,
}

impl RotationConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

/// Content source configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentConfig {
    /// JSON file of case studies; built-in case studies are used when unset
    pub path: Option<PathBuf>,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Card width in terminal columns
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rotation: RotationConfig { period_ms: 4000 },
            content: ContentConfig::default(),
            display: DisplayConfig { width: 72 },
        }
    }
}

impl Config {
    /// Load configuration from showcase-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        period_ms = config.rotation.period_ms,
                        "loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), "invalid config file format: {}", e);
                    warn!("using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to showcase-config.toml
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(CONFIG_FILE)
    }

    /// Save current configuration to `path`
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }
}
