//! Default values that do not belong to a single focused subsystem.

use crate::types::{KeyBinding, RouteConfig};

// ── Session ────────────────────────────────────────────────────────────────

pub fn home_path() -> String {
    "/".to_string()
}

pub fn loading_title() -> String {
    "Loading...".to_string()
}

pub fn click_reset_ms() -> u64 {
    300
}

pub fn routes() -> Vec<RouteConfig> {
    vec![RouteConfig::new("/", "Home").with_icon("home")]
}

// ── Keybindings ────────────────────────────────────────────────────────────

pub fn keybindings() -> Vec<KeyBinding> {
    // Plain CmdOrCtrl+W / Ctrl+Tab are taken by the browser itself, so the
    // tab strip shortcuts add Alt.
    vec![
        KeyBinding::new("CmdOrCtrl+Alt+W", "close_tab"),
        KeyBinding::new("CmdOrCtrl+Alt+Right", "next_tab"),
        KeyBinding::new("CmdOrCtrl+Alt+Left", "prev_tab"),
    ]
}
