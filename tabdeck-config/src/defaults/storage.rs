//! Persistence defaults: session file location and store keys.

use std::path::PathBuf;

pub fn session_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tabdeck")
        .join("session.json")
}

pub fn tabs_key() -> String {
    "tabdeck.tabs".to_string()
}

pub fn recency_key() -> String {
    "tabdeck.tab-last-used".to_string()
}

pub fn tabs_enabled_key() -> String {
    "tabdeck.tabs-enabled".to_string()
}

pub fn tab_position_key() -> String {
    "tabdeck.tab-position".to_string()
}
