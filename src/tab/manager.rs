//! Tab manager: the ordered tab store and its interaction handlers

use super::metadata::TabMetadataResolver;
use super::ordering::{apply_ordering, sort_by_group};
use super::persistence::{load_tabs, save_tabs};
use super::recency::RecencyTracker;
use super::{Tab, TabId};
use crate::clock::Clock;
use crate::router::{Location, Navigator, normalize_path};
use std::sync::Arc;
use tabdeck_config::{Config, KeyValueStore};

/// Callback receiving every tab activated by a route change.
pub type ActivationListener = Box<dyn FnMut(&Tab)>;

/// Settings the manager needs from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSettings {
    pub home_path: String,
    pub loading_title: String,
    pub tabs_key: String,
    pub recency_key: String,
    pub module_order: Vec<String>,
}

impl ManagerSettings {
    /// The home path is normalised the way route locations are, so the home
    /// tab is recognised whatever trailing slashes the config carries.
    pub fn from_config(config: &Config) -> Self {
        Self {
            home_path: normalize_path(&config.home_path),
            loading_title: config.loading_title.clone(),
            tabs_key: config.storage.tabs_key.clone(),
            recency_key: config.storage.recency_key.clone(),
            module_order: config.module_order.clone(),
        }
    }
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Owns the ordered tab list and the active tab.
///
/// Every mutation re-applies the ordering policy and writes the list back to
/// the store. Operations on ids that are not open are silent no-ops.
pub struct TabManager {
    /// All open tabs, in display order
    pub(super) tabs: Vec<Tab>,
    /// Currently active tab ID
    pub(super) active_tab_id: Option<TabId>,
    pub(super) recency: RecencyTracker,
    pub(super) store: Box<dyn KeyValueStore>,
    pub(super) navigator: Box<dyn Navigator>,
    pub(super) resolver: Arc<dyn TabMetadataResolver>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: ManagerSettings,
    pub(super) activation_listener: Option<ActivationListener>,
    /// Tab picked up by an in-progress drag
    drag_source: Option<TabId>,
}

impl TabManager {
    /// Load persisted tabs and recency and build the manager.
    ///
    /// No tab is active until the first route change is synchronised.
    pub fn new(
        settings: ManagerSettings,
        store: Box<dyn KeyValueStore>,
        navigator: Box<dyn Navigator>,
        resolver: Arc<dyn TabMetadataResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut tabs = load_tabs(store.as_ref(), &settings.tabs_key);
        apply_ordering(&mut tabs, &settings.home_path);
        let recency = RecencyTracker::load(store.as_ref(), &settings.recency_key);

        log::info!(
            "Tab manager loaded {} tabs ({} recency entries)",
            tabs.len(),
            recency.len()
        );

        Self {
            tabs,
            active_tab_id: None,
            recency,
            store,
            navigator,
            resolver,
            clock,
            settings,
            activation_listener: None,
            drag_source: None,
        }
    }

    /// Register the callback notified when a route change activates a tab.
    pub fn set_activation_listener(&mut self, listener: impl FnMut(&Tab) + 'static) {
        self.activation_listener = Some(Box::new(listener));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab_id.as_ref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.as_ref().and_then(|id| self.get_tab(id))
    }

    pub fn get_tab(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == id)
    }

    pub fn tab_by_path(&self, path: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.path == path)
    }

    /// Index of a tab in display order
    pub fn tab_index(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == id)
    }

    pub fn recency(&self) -> &RecencyTracker {
        &self.recency
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    pub fn resolver(&self) -> &dyn TabMetadataResolver {
        self.resolver.as_ref()
    }

    /// Current location reported by the navigator.
    pub fn current_location(&self) -> Location {
        self.navigator.current()
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Activate a tab on click: mark it used and navigate to it.
    pub fn activate_tab(&mut self, id: &TabId) -> bool {
        let Some(path) = self.get_tab(id).map(|t| t.path.clone()) else {
            log::debug!("Ignoring activation of unknown tab {}", id);
            return false;
        };
        self.active_tab_id = Some(id.clone());
        self.record_used(id);
        self.navigate_to(&path);
        true
    }

    /// Navigate to the tab after the active one, wrapping to the first.
    ///
    /// Only requests navigation; the route change performs the activation.
    pub fn request_next_tab(&mut self) -> bool {
        self.request_relative(1)
    }

    /// Navigate to the tab before the active one, wrapping to the last.
    pub fn request_prev_tab(&mut self) -> bool {
        self.request_relative(-1)
    }

    fn request_relative(&mut self, step: isize) -> bool {
        let len = self.tabs.len();
        if len == 0 {
            return false;
        }
        let target = match self.active_tab_id.as_ref().and_then(|id| self.tab_index(id)) {
            Some(idx) => (idx as isize + step).rem_euclid(len as isize) as usize,
            None if step > 0 => 0,
            None => len - 1,
        };
        let path = self.tabs[target].path.clone();
        self.navigate_to(&path);
        true
    }

    // ========================================================================
    // Close
    // ========================================================================

    /// Close a tab by ID.
    ///
    /// When the active tab closes, the most recently used remaining tab takes
    /// over; if none was ever used, the tab to its right does, or the new
    /// last tab. Closing the last tab navigates home.
    pub fn close_tab(&mut self, id: &TabId) -> bool {
        let Some(index) = self.tab_index(id) else {
            log::debug!("Ignoring close of unknown tab {}", id);
            return false;
        };

        let closed = self.tabs.remove(index);
        self.forget(&closed.id);
        log::info!("Closing tab {} '{}' (index {})", closed.id, closed.path, index);

        if self.active_tab_id.as_ref() != Some(&closed.id) {
            self.commit();
            return true;
        }

        if self.tabs.is_empty() {
            self.active_tab_id = None;
            self.commit();
            self.navigate_home();
            return true;
        }

        let next = match self.recency.most_recent(&self.tabs) {
            Some(tab) => tab,
            None => &self.tabs[index.min(self.tabs.len() - 1)],
        };
        let (next_id, next_path) = (next.id.clone(), next.path.clone());
        log::debug!("Reassigning active tab to {}", next_id);

        self.active_tab_id = Some(next_id.clone());
        self.record_used(&next_id);
        self.commit();
        self.navigate_to(&next_path);
        true
    }

    /// Close the active tab, if any.
    pub fn close_active(&mut self) -> bool {
        match self.active_tab_id.clone() {
            Some(id) => self.close_tab(&id),
            None => false,
        }
    }

    /// Close every tab except `keep`, which becomes active.
    pub fn close_others(&mut self, keep: &TabId) -> bool {
        let Some(path) = self.get_tab(keep).map(|t| t.path.clone()) else {
            return false;
        };
        let closed: Vec<TabId> = self
            .tabs
            .iter()
            .filter(|t| &t.id != keep)
            .map(|t| t.id.clone())
            .collect();
        if closed.is_empty() {
            return false;
        }

        self.tabs.retain(|t| &t.id == keep);
        for id in &closed {
            self.forget(id);
        }
        log::info!("Closed {} other tabs", closed.len());

        let was_active = self.active_tab_id.as_ref() == Some(keep);
        self.active_tab_id = Some(keep.clone());
        self.record_used(keep);
        self.commit();
        if !was_active {
            self.navigate_to(&path);
        }
        true
    }

    /// Close every tab and navigate home.
    pub fn close_all(&mut self) -> bool {
        if self.tabs.is_empty() {
            return false;
        }
        log::info!("Closing all {} tabs", self.tabs.len());
        self.tabs.clear();
        self.active_tab_id = None;
        if let Err(e) = self.recency.clear(self.store.as_mut()) {
            log::warn!("Failed to persist tab recency: {}", e);
        }
        self.commit();
        self.navigate_home();
        true
    }

    // ========================================================================
    // Pin / group
    // ========================================================================

    pub fn toggle_pin(&mut self, id: &TabId) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        tab.pinned = !tab.pinned;
        log::debug!("Tab {} pinned={}", tab.id, tab.pinned);
        self.commit();
        true
    }

    /// Flip grouping for every open tab sharing this tab's configured group.
    ///
    /// No-op for tabs whose route has no group.
    pub fn toggle_group(&mut self, id: &TabId) -> bool {
        let Some(tab) = self.get_tab(id) else {
            return false;
        };
        let Some(group) = self.resolver.resolve(&tab.path).group else {
            log::debug!("Tab {} has no configured group", id);
            return false;
        };
        let grouped = !tab.grouped;

        for tab in &mut self.tabs {
            if self.resolver.resolve(&tab.path).group.as_deref() == Some(group.as_str()) {
                tab.grouped = grouped;
            }
        }
        log::debug!("Group '{}' grouped={}", group, grouped);
        self.commit();
        true
    }

    /// User-invoked bulk sort by module, group and sequence.
    pub fn sort_by_group(&mut self) {
        sort_by_group(
            &mut self.tabs,
            self.resolver.as_ref(),
            &self.settings.module_order,
            &self.settings.home_path,
        );
        self.persist();
    }

    // ========================================================================
    // Drag reorder
    // ========================================================================

    /// Move `source` to the index `dest` occupies, shifting `dest` and
    /// everything after it right by one.
    ///
    /// `[A, B, C, D]` with A dropped on C becomes `[B, C, A, D]`.
    pub fn reorder(&mut self, source: &TabId, dest: &TabId) -> bool {
        if source == dest {
            return false;
        }
        let (Some(from), Some(to)) = (self.tab_index(source), self.tab_index(dest)) else {
            log::debug!("Ignoring drop of {} onto {}", source, dest);
            return false;
        };
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.commit();
        true
    }

    pub fn begin_drag(&mut self, id: &TabId) {
        self.drag_source = self.get_tab(id).map(|t| t.id.clone());
    }

    /// Drop the dragged tab onto `dest`. Drag state is cleared either way.
    pub fn drop_on(&mut self, dest: &TabId) -> bool {
        match self.drag_source.take() {
            Some(source) => self.reorder(&source, dest),
            None => false,
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag_source = None;
    }

    pub fn dragging(&self) -> Option<&TabId> {
        self.drag_source.as_ref()
    }

    // ========================================================================
    // Title update
    // ========================================================================

    /// Replace the title (and icon, when given) of the tab at `path`.
    ///
    /// No-op when `title` is absent or empty, or no tab matches.
    pub fn update_title(&mut self, path: &str, title: Option<&str>, icon_name: Option<&str>) -> bool {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return false;
        };
        let Some(tab) = self.tabs.iter_mut().find(|t| t.path == path) else {
            return false;
        };
        tab.title = title.to_string();
        if let Some(icon) = icon_name {
            tab.icon_name = Some(icon.to_string());
        }
        self.persist();
        true
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Re-apply the ordering policy and persist.
    pub(super) fn commit(&mut self) {
        apply_ordering(&mut self.tabs, &self.settings.home_path);
        self.persist();
    }

    pub(super) fn persist(&mut self) {
        if let Err(e) = save_tabs(self.store.as_mut(), &self.settings.tabs_key, &self.tabs) {
            log::warn!("Failed to persist tabs: {}", e);
        }
    }

    pub(super) fn record_used(&mut self, id: &TabId) {
        let now = self.clock.now_millis();
        if let Err(e) = self.recency.record_used(id, now, self.store.as_mut()) {
            log::warn!("Failed to persist tab recency: {}", e);
        }
    }

    fn forget(&mut self, id: &TabId) {
        if let Err(e) = self.recency.remove(id, self.store.as_mut()) {
            log::warn!("Failed to persist tab recency: {}", e);
        }
    }

    fn navigate_to(&mut self, path: &str) {
        self.navigator.navigate(Location::parse(path));
    }

    fn navigate_home(&mut self) {
        let home = self.settings.home_path.clone();
        self.navigate_to(&home);
    }
}
