//! Loading and saving the open tab list.

use super::Tab;
use std::collections::HashSet;
use tabdeck_config::{KeyValueStore, StoreError, write_json};

/// Load the persisted tab list.
///
/// This is the one-time cleanup pass run at mount: entries that fail to
/// deserialize or lack an id or path are dropped, and later duplicates of a
/// path already seen are discarded. A missing or malformed list reads as
/// empty.
pub fn load_tabs(store: &dyn KeyValueStore, key: &str) -> Vec<Tab> {
    let Some(value) = store.get(key) else {
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        log::warn!("Persisted tab list under '{}' is not an array, ignoring", key);
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut tabs = Vec::with_capacity(entries.len());
    for entry in entries {
        let tab: Tab = match serde_json::from_value(entry.clone()) {
            Ok(tab) => tab,
            Err(e) => {
                log::debug!("Dropping unreadable tab entry: {}", e);
                continue;
            }
        };
        if tab.id.as_str().is_empty() || tab.path.is_empty() {
            continue;
        }
        if !seen.insert(tab.path.clone()) {
            continue;
        }
        tabs.push(tab);
    }

    let dropped = entries.len() - tabs.len();
    if dropped > 0 {
        log::warn!("Dropped {} invalid persisted tab entries", dropped);
    }
    tabs
}

/// Persist the tab list, replacing the previous one.
pub fn save_tabs(store: &mut dyn KeyValueStore, key: &str, tabs: &[Tab]) -> Result<(), StoreError> {
    write_json(store, key, tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::TabId;
    use serde_json::json;
    use tabdeck_config::MemoryStore;

    const KEY: &str = "tabs";

    #[test]
    fn missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_tabs(&store, KEY).is_empty());
    }

    #[test]
    fn non_array_is_empty() {
        let mut store = MemoryStore::new();
        store.set(KEY, json!({"id": "a"})).unwrap();
        assert!(load_tabs(&store, KEY).is_empty());
    }

    #[test]
    fn invalid_entries_are_dropped() {
        let mut store = MemoryStore::new();
        store
            .set(
                KEY,
                json!([
                    {"id": "a", "path": "/", "title": "Home"},
                    {"path": "/no-id", "title": "x"},
                    {"id": "b", "title": "no path"},
                    {"id": "", "path": "/empty-id"},
                    {"id": "c", "path": ""},
                    42,
                    {"id": "d", "path": "/sales", "title": "Sales"}
                ]),
            )
            .unwrap();

        let tabs = load_tabs(&store, KEY);
        let ids: Vec<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn duplicate_paths_keep_first() {
        let mut store = MemoryStore::new();
        store
            .set(
                KEY,
                json!([
                    {"id": "a", "path": "/sales", "title": "First"},
                    {"id": "b", "path": "/sales", "title": "Second"}
                ]),
            )
            .unwrap();
        let tabs = load_tabs(&store, KEY);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].id, TabId::from("a"));
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let mut store = MemoryStore::new();
        let mut a = Tab::new("/", "Home").with_icon(Some("home".into()));
        a.pinned = true;
        let mut b = Tab::new("/bookings/3", "Booking 3");
        b.grouped = true;
        b.data = Some(json!({"ref": 3}));
        let tabs = vec![a, b];

        save_tabs(&mut store, KEY, &tabs).unwrap();
        assert_eq!(load_tabs(&store, KEY), tabs);
    }
}
