//! Core `Config` struct.

use crate::types::{KeyBinding, RouteConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Tab session configuration, normally read from `config.yaml`.
///
/// Every field has a serde default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Route treated as home: sorts first and is the fallback navigation target
    #[serde(default = "crate::defaults::home_path")]
    pub home_path: String,

    /// Placeholder title for routes flagged `loading_on_added`
    #[serde(default = "crate::defaults::loading_title")]
    pub loading_title: String,

    /// Static route table used to resolve tab titles, icons and groups
    #[serde(default = "crate::defaults::routes")]
    pub routes: Vec<RouteConfig>,

    /// Module order applied by "sort by group"
    #[serde(default)]
    pub module_order: Vec<String>,

    /// Keyboard shortcuts for tab actions
    #[serde(default = "crate::defaults::keybindings")]
    pub keybindings: Vec<KeyBinding>,

    /// Persistent store location and keys
    #[serde(default)]
    pub storage: StorageConfig,

    /// How long a tab click counts as user-initiated, in milliseconds
    #[serde(default = "crate::defaults::click_reset_ms")]
    pub click_reset_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_path: crate::defaults::home_path(),
            loading_title: crate::defaults::loading_title(),
            routes: crate::defaults::routes(),
            module_order: Vec::new(),
            keybindings: crate::defaults::keybindings(),
            storage: StorageConfig::default(),
            click_reset_ms: crate::defaults::click_reset_ms(),
        }
    }
}
