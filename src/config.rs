//! Configuration file handling for vitrine.
//!
//! Loads configuration from `~/.config/vitrine/config.toml` or a custom
//! path. A missing file means defaults; a file that exists but cannot be
//! parsed is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::hero::{CatalogError, ImageCatalog, RotatorTiming};

/// Configuration file structure for vitrine.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[hero]` section: rotation timing and the ordered image list.
#[derive(Debug, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_key")]
    pub default_key: String,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    /// `[[hero.image]]` entries; array order is rotation order.
    #[serde(default, rename = "image")]
    pub images: Vec<ImageEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageEntry {
    pub key: String,
    pub url: String,
}

/// `[relay]` section: contact form relay settings.
#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// `[ui]` section: demo binary presentation.
#[derive(Debug, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_line: bool,
}

fn default_key() -> String {
    "home".to_string()
}

fn default_interval_ms() -> u64 {
    6000
}

fn default_cooldown_ms() -> u64 {
    9000
}

fn default_reveal_threshold() -> f32 {
    0.2
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            default_key: default_key(),
            interval_ms: default_interval_ms(),
            cooldown_ms: default_cooldown_ms(),
            reveal_threshold: default_reveal_threshold(),
            images: Vec::new(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_line: default_true(),
        }
    }
}

impl HeroConfig {
    /// Build the image catalog from the configured entries.
    ///
    /// Returns `Ok(None)` when no images are configured - the rotator is
    /// then disabled rather than erroring.
    pub fn catalog(&self) -> Result<Option<ImageCatalog>, CatalogError> {
        if self.images.is_empty() {
            return Ok(None);
        }
        ImageCatalog::from_entries(
            self.images
                .iter()
                .map(|entry| (entry.key.clone(), entry.url.clone())),
        )
        .map(Some)
    }

    pub fn timing(&self) -> RotatorTiming {
        RotatorTiming {
            interval: Duration::from_millis(self.interval_ms),
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("vitrine").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/vitrine/config.toml")
        })
}
