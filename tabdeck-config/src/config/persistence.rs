//! Config persistence and path resolution for `Config`.
//!
//! Config lives in `~/.config/tabdeck/config.yaml`.

use super::config_struct::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Directory holding `config.yaml` and the default session file.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tabdeck")
    }

    /// Default config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// A missing or empty file yields `Config::default()`. Unreadable,
    /// unparsable or invalid files are errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Config path: {:?}", path);
        if !path.exists() {
            log::info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            log::info!("Config file {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        let mut config: Config = serde_yaml_ng::from_str(&contents)?;
        config.merge_default_keybindings();
        config.validate()?;

        log::info!(
            "Loaded config from {:?} ({} routes, {} keybindings)",
            path,
            config.routes.len(),
            config.keybindings.len()
        );
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_yaml_ng::to_string(self)?;
        fs::write(path, contents)?;
        log::info!("Saved config to {:?}", path);
        Ok(())
    }
}
