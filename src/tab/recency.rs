//! Last-used timestamps for tabs.
//!
//! Recency is persisted separately from the tab list so that closing and
//! reopening the application keeps the "switch to last viewed tab" order.

use super::{Tab, TabId};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tabdeck_config::{KeyValueStore, StoreError};

/// Map of tab id to last-used epoch milliseconds.
#[derive(Debug, Clone, Default)]
pub struct RecencyTracker {
    key: String,
    last_used: HashMap<TabId, i64>,
}

impl RecencyTracker {
    /// An empty tracker persisting under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            last_used: HashMap::new(),
        }
    }

    /// Load the persisted map. Non-numeric entries are skipped.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let mut tracker = Self::new(key);
        match store.get(key) {
            Some(Value::Object(map)) => {
                for (id, value) in map {
                    if let Some(ts) = value.as_i64() {
                        tracker.last_used.insert(TabId::from(id), ts);
                    }
                }
            }
            Some(_) => log::warn!("Recency map under '{}' is not an object, ignoring", key),
            None => {}
        }
        tracker
    }

    /// Timestamp of last use; `0` when the tab was never used or is unknown.
    pub fn last_used(&self, id: &TabId) -> i64 {
        self.last_used.get(id).copied().unwrap_or(0)
    }

    /// Mark `id` used at `now` and persist the whole map.
    pub fn record_used(
        &mut self,
        id: &TabId,
        now: i64,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), StoreError> {
        self.last_used.insert(id.clone(), now);
        self.save(store)
    }

    /// Forget `id` and persist.
    pub fn remove(&mut self, id: &TabId, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        self.last_used.remove(id);
        self.save(store)
    }

    /// Drop every entry and persist.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        self.last_used.clear();
        self.save(store)
    }

    /// The most recently used tab among `candidates`.
    ///
    /// Returns `None` when no candidate has a nonzero timestamp. On equal
    /// timestamps the earliest candidate wins.
    pub fn most_recent<'a>(&self, candidates: &'a [Tab]) -> Option<&'a Tab> {
        let (best, ts) = candidates
            .iter()
            .map(|tab| (tab, self.last_used(&tab.id)))
            .fold(None, |best: Option<(&Tab, i64)>, (tab, ts)| match best {
                Some((_, best_ts)) if best_ts >= ts => best,
                _ => Some((tab, ts)),
            })?;
        (ts > 0).then_some(best)
    }

    pub fn len(&self) -> usize {
        self.last_used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_used.is_empty()
    }

    fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let map: Map<String, Value> = self
            .last_used
            .iter()
            .map(|(id, ts)| (id.to_string(), Value::from(*ts)))
            .collect();
        store.set(&self.key, Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabdeck_config::MemoryStore;

    fn tab(id: &str) -> Tab {
        let mut tab = Tab::new(format!("/{id}"), id);
        tab.id = TabId::from(id);
        tab
    }

    #[test]
    fn unknown_ids_default_to_zero() {
        let tracker = RecencyTracker::new("r");
        assert_eq!(tracker.last_used(&TabId::from("ghost")), 0);
    }

    #[test]
    fn record_persists_whole_map() {
        let mut store = MemoryStore::new();
        let mut tracker = RecencyTracker::new("r");
        tracker.record_used(&TabId::from("a"), 10, &mut store).unwrap();
        tracker.record_used(&TabId::from("b"), 20, &mut store).unwrap();
        assert_eq!(store.get("r"), Some(json!({"a": 10, "b": 20})));

        tracker.remove(&TabId::from("a"), &mut store).unwrap();
        assert_eq!(store.get("r"), Some(json!({"b": 20})));
    }

    #[test]
    fn load_skips_non_numeric_entries() {
        let mut store = MemoryStore::new();
        store.set("r", json!({"a": 5, "b": "yesterday", "c": null})).unwrap();
        let tracker = RecencyTracker::load(&store, "r");
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.last_used(&TabId::from("a")), 5);
    }

    #[test]
    fn most_recent_picks_highest() {
        let mut store = MemoryStore::new();
        let mut tracker = RecencyTracker::new("r");
        tracker.record_used(&TabId::from("b"), 30, &mut store).unwrap();
        tracker.record_used(&TabId::from("c"), 20, &mut store).unwrap();
        let tabs = vec![tab("a"), tab("b"), tab("c")];
        assert_eq!(tracker.most_recent(&tabs).map(|t| t.id.as_str()), Some("b"));
    }

    #[test]
    fn most_recent_ties_keep_first() {
        let mut store = MemoryStore::new();
        let mut tracker = RecencyTracker::new("r");
        tracker.record_used(&TabId::from("b"), 7, &mut store).unwrap();
        tracker.record_used(&TabId::from("c"), 7, &mut store).unwrap();
        let tabs = vec![tab("a"), tab("b"), tab("c")];
        assert_eq!(tracker.most_recent(&tabs).map(|t| t.id.as_str()), Some("b"));
    }

    #[test]
    fn most_recent_none_without_usage() {
        let tracker = RecencyTracker::new("r");
        assert!(tracker.most_recent(&[tab("a"), tab("b")]).is_none());
        assert!(tracker.most_recent(&[]).is_none());
    }
}
