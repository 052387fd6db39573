//! The mounted tab session.
//!
//! [`TabSession`] ties the tab manager to its surroundings: it reads the
//! preferences at mount, follows the event bus, turns key presses into tab
//! actions, keeps the scroller informed of activation changes and
//! synchronises the route after every operation that navigated.

use crate::click_guard::ClickGuard;
use crate::clock::Clock;
use crate::events::{AppEvent, EventBus, EventKind, Subscription};
use crate::router::{Location, Navigator};
use crate::scroller::{ScrollCommand, StripLayout, ViewportScroller, overflow_tabs};
use crate::shortcuts::{TabAction, TabShortcuts};
use crate::tab::{ManagerSettings, RouteOutcome, Tab, TabId, TabManager, TabMetadataResolver};
use std::sync::Arc;
use tabdeck_config::{Config, KeyValueStore, Preferences};
use winit::keyboard::{Key, KeyCode, ModifiersState};

/// Snapshot used to detect activation and order changes.
type StripState = (Option<TabId>, Vec<TabId>);

pub struct TabSession {
    manager: TabManager,
    preferences: Preferences,
    shortcuts: TabShortcuts,
    scroller: ViewportScroller,
    click_guard: ClickGuard,
    clock: Arc<dyn Clock>,
    subscription: Subscription,
    /// Last location handed to the route synchroniser
    last_location: Option<Location>,
    torn_down: bool,
}

impl TabSession {
    /// Mount the session: load tabs and preferences, subscribe to the bus and
    /// synchronise the current route.
    pub fn mount(
        config: &Config,
        store: Box<dyn KeyValueStore>,
        navigator: Box<dyn Navigator>,
        resolver: Arc<dyn TabMetadataResolver>,
        clock: Arc<dyn Clock>,
        bus: &EventBus,
    ) -> Self {
        let preferences = Preferences::load(store.as_ref(), &config.storage);
        let manager = TabManager::new(
            ManagerSettings::from_config(config),
            store,
            navigator,
            resolver,
            clock.clone(),
        );

        let mut session = Self {
            manager,
            preferences,
            shortcuts: TabShortcuts::from_config(&config.keybindings),
            scroller: ViewportScroller::new(),
            click_guard: ClickGuard::new(config.click_reset_ms),
            clock,
            subscription: bus.subscribe(Some(EventKind::all())),
            last_location: None,
            torn_down: false,
        };

        log::info!(
            "Tab session mounted (tabs enabled: {}, position: {})",
            session.preferences.tabs_enabled,
            session.preferences.tab_position
        );
        session.sync_route();
        session
    }

    /// Register the callback notified when a route change activates a tab.
    pub fn set_activation_listener(&mut self, listener: impl FnMut(&Tab) + 'static) {
        self.manager.set_activation_listener(listener);
    }

    pub fn manager(&self) -> &TabManager {
        &self.manager
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Whether the tab strip should be rendered.
    pub fn is_visible(&self) -> bool {
        self.preferences.tabs_enabled
    }

    // ========================================================================
    // Route synchronisation
    // ========================================================================

    /// Host notification of a route change.
    ///
    /// Ignored while tabs are disabled.
    pub fn on_route_change(&mut self, location: &Location) -> Option<RouteOutcome> {
        if self.torn_down || !self.preferences.tabs_enabled {
            return None;
        }
        let before = self.snapshot();
        self.last_location = Some(location.clone());
        let outcome = self.manager.on_route_change(location);
        self.observe(before);
        Some(outcome)
    }

    /// Synchronise with the navigator's current location if it moved since
    /// the last synchronisation.
    pub fn sync_route(&mut self) -> Option<RouteOutcome> {
        let location = self.manager.current_location();
        if self.last_location.as_ref() == Some(&location) {
            return None;
        }
        self.on_route_change(&location)
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Activate a tab from a click.
    pub fn click_tab(&mut self, id: &TabId) -> bool {
        self.click_guard.mark(self.clock.now_millis());
        self.run(|m| m.activate_tab(id))
    }

    pub fn close_tab(&mut self, id: &TabId) -> bool {
        self.run(|m| m.close_tab(id))
    }

    pub fn close_active(&mut self) -> bool {
        self.run(TabManager::close_active)
    }

    pub fn close_others(&mut self, keep: &TabId) -> bool {
        self.run(|m| m.close_others(keep))
    }

    pub fn close_all(&mut self) -> bool {
        self.run(TabManager::close_all)
    }

    pub fn toggle_pin(&mut self, id: &TabId) -> bool {
        self.run(|m| m.toggle_pin(id))
    }

    pub fn toggle_group(&mut self, id: &TabId) -> bool {
        self.run(|m| m.toggle_group(id))
    }

    pub fn sort_by_group(&mut self) {
        self.run(TabManager::sort_by_group)
    }

    pub fn reorder(&mut self, source: &TabId, dest: &TabId) -> bool {
        self.run(|m| m.reorder(source, dest))
    }

    pub fn begin_drag(&mut self, id: &TabId) {
        self.manager.begin_drag(id);
    }

    pub fn drop_on(&mut self, dest: &TabId) -> bool {
        self.run(|m| m.drop_on(dest))
    }

    pub fn cancel_drag(&mut self) {
        self.manager.cancel_drag();
    }

    pub fn next_tab(&mut self) -> bool {
        self.run(TabManager::request_next_tab)
    }

    pub fn prev_tab(&mut self) -> bool {
        self.run(TabManager::request_prev_tab)
    }

    pub fn update_title(&mut self, path: &str, title: Option<&str>, icon_name: Option<&str>) -> bool {
        self.manager.update_title(path, title, icon_name)
    }

    /// Dispatch a key press. Returns the action performed, if the press was
    /// bound to one.
    pub fn handle_key(
        &mut self,
        key: &Key,
        physical_key: Option<KeyCode>,
        modifiers: ModifiersState,
    ) -> Option<TabAction> {
        if self.torn_down || !self.preferences.tabs_enabled {
            return None;
        }
        let action = self.shortcuts.resolve(key, physical_key, modifiers)?;
        log::debug!("Key press mapped to {}", action.name());
        match action {
            TabAction::CloseTab => self.close_active(),
            TabAction::NextTab => self.next_tab(),
            TabAction::PrevTab => self.prev_tab(),
        };
        Some(action)
    }

    // ========================================================================
    // Event loop hooks
    // ========================================================================

    /// Apply buffered bus events. Returns the number handled.
    pub fn pump_events(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        let events = self.subscription.drain();
        let count = events.len();
        for event in events {
            match event {
                AppEvent::UpdateTabTitle(update) => {
                    self.manager.update_title(
                        &update.path,
                        update.title.as_deref(),
                        update.icon_name.as_deref(),
                    );
                }
                AppEvent::TabsPreferenceChanged { enabled } => {
                    log::info!("Tabs enabled changed to {}", enabled);
                    self.preferences.tabs_enabled = enabled;
                    if enabled {
                        self.last_location = None;
                        self.sync_route();
                    } else {
                        self.scroller.cancel();
                    }
                }
                AppEvent::TabPositionChanged { position } => {
                    log::info!("Tab position changed to {}", position);
                    self.preferences.tab_position = position;
                }
            }
        }
        count
    }

    /// Called once layout has settled after a frame.
    pub fn on_frame(&mut self, layout: &StripLayout) -> Option<ScrollCommand> {
        if self.torn_down {
            return None;
        }
        self.scroller.on_frame(layout)
    }

    /// Tabs that do not fit the visible strip, for the overflow menu.
    pub fn overflow_tabs(&self, layout: &StripLayout) -> Vec<TabId> {
        overflow_tabs(layout)
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.scroller.has_pending()
    }

    /// Unmount: cancel pending scrolls and timers. Route changes, key presses,
    /// events and frames are ignored afterwards.
    pub fn teardown(&mut self) {
        self.scroller.cancel();
        self.click_guard.clear();
        self.manager.cancel_drag();
        self.torn_down = true;
        log::info!("Tab session torn down");
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn run<R>(&mut self, op: impl FnOnce(&mut TabManager) -> R) -> R {
        let before = self.snapshot();
        let result = op(&mut self.manager);
        self.observe(before);
        self.sync_route();
        result
    }

    fn snapshot(&self) -> StripState {
        (
            self.manager.active_tab_id().cloned(),
            self.manager.tabs().iter().map(|t| t.id.clone()).collect(),
        )
    }

    /// Schedule a scroll to the active tab if activation or order changed,
    /// unless the change came from a click still in progress.
    fn observe(&mut self, before: StripState) {
        if self.snapshot() == before {
            return;
        }
        let Some(active) = self.manager.active_tab_id().cloned() else {
            self.scroller.cancel();
            return;
        };
        if self.click_guard.is_active(self.clock.now_millis()) {
            self.scroller.cancel();
            return;
        }
        self.scroller.schedule(active);
    }
}
