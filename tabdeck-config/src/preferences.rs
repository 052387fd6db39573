//! User preferences that gate tab strip rendering.
//!
//! Preferences are owned by the settings screens of the host application;
//! the tab session reads them once at mount and then follows change events.

use crate::error::StoreError;
use crate::store::{KeyValueStore, read_json, write_json};
use crate::types::{StorageConfig, TabPosition};

/// Tab strip preferences, stored as two independent keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Whether the tab strip is shown at all
    pub tabs_enabled: bool,
    /// Where the strip is rendered
    pub tab_position: TabPosition,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            tabs_enabled: true,
            tab_position: TabPosition::default(),
        }
    }
}

impl Preferences {
    /// Read both flags from the store, defaulting each independently.
    pub fn load(store: &dyn KeyValueStore, keys: &StorageConfig) -> Self {
        let tabs_enabled = read_json::<bool>(store, &keys.tabs_enabled_key).unwrap_or(true);
        let tab_position = read_json::<String>(store, &keys.tab_position_key)
            .and_then(|s| {
                let parsed = TabPosition::parse(&s);
                if parsed.is_none() {
                    log::warn!("Unknown tab position '{}', using default", s);
                }
                parsed
            })
            .unwrap_or_default();
        Self {
            tabs_enabled,
            tab_position,
        }
    }

    /// Write both flags to the store.
    pub fn save(
        &self,
        store: &mut dyn KeyValueStore,
        keys: &StorageConfig,
    ) -> Result<(), StoreError> {
        write_json(store, &keys.tabs_enabled_key, &self.tabs_enabled)?;
        write_json(store, &keys.tab_position_key, self.tab_position.as_str())
    }
}
