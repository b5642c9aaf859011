//! Configuration file support for carted
//!
//! Reads from .carted/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Store-related configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct StoreConfig {
    /// Override for the store file location. When unset, the path is
    /// resolved from CARTED_STORE_PATH or by walking up for a .carted dir.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// UI-related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiConfig {
    /// How long transient notices stay visible, in seconds
    /// Default: 3
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

fn default_notice_secs() -> u64 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_secs: default_notice_secs(),
        }
    }
}

impl Config {
    /// Load config from .carted/config.toml
    /// Returns default config if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str(&contents) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Find config.toml by walking up directory tree
    fn find_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut dir = current_dir.as_path();

        loop {
            let config_path = dir.join(".carted").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }

    /// The store path to use. The env var always takes priority, then the
    /// config override, then the default walk-up resolution.
    pub fn store_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var(crate::store::STORE_PATH_ENV) {
            return PathBuf::from(path);
        }
        match &self.store.path {
            Some(path) => path.clone(),
            None => crate::store::default_store_path(),
        }
    }
}
