//! Configuration system for tabdeck.
//!
//! This crate provides configuration loading, saving, and default values
//! for the tab session. It includes:
//!
//! - The route table that drives tab titles, icons and groups
//! - Keybinding configuration for tab shortcuts
//! - Tab strip preferences
//! - The persistent key-value store used for session state

pub mod config;
pub mod defaults;
pub mod error;
pub mod preferences;
pub mod store;
mod types;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use preferences::Preferences;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, SharedStore, read_json, write_json};
pub use types::{KeyBinding, RouteConfig, StorageConfig, TabPosition};
