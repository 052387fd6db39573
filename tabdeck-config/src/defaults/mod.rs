//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on config fields.

mod misc;
mod storage;

// ── Session behaviour ──────────────────────────────────────────────────────
pub use misc::{click_reset_ms, home_path, keybindings, loading_title, routes};

// ── Persistence ────────────────────────────────────────────────────────────
pub use storage::{recency_key, session_file, tab_position_key, tabs_enabled_key, tabs_key};
