//! Persistent store location and key names.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where session state lives and under which keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Session file used by the file-backed store
    #[serde(default = "crate::defaults::session_file")]
    pub session_file: PathBuf,
    /// Key holding the tab list
    #[serde(default = "crate::defaults::tabs_key")]
    pub tabs_key: String,
    /// Key holding the tab id -> last-used timestamp map
    #[serde(default = "crate::defaults::recency_key")]
    pub recency_key: String,
    /// Key holding the tabs-enabled flag
    #[serde(default = "crate::defaults::tabs_enabled_key")]
    pub tabs_enabled_key: String,
    /// Key holding the tab strip position
    #[serde(default = "crate::defaults::tab_position_key")]
    pub tab_position_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: crate::defaults::session_file(),
            tabs_key: crate::defaults::tabs_key(),
            recency_key: crate::defaults::recency_key(),
            tabs_enabled_key: crate::defaults::tabs_enabled_key(),
            tab_position_key: crate::defaults::tab_position_key(),
        }
    }
}
