//! Route synchronisation: every route change activates or creates a tab.
//!
//! The handler also fires for navigation the manager itself requested, so a
//! change to a path that already has a tab must only activate it.

use super::manager::TabManager;
use super::metadata::TabMetadataResolver;
use super::ordering::apply_ordering;
use super::{Tab, TabId};
use crate::router::Location;

/// What a route change did to the tab list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// An existing tab became active
    Activated(TabId),
    /// A new tab was opened and activated
    Created(TabId),
}

impl RouteOutcome {
    pub fn tab_id(&self) -> &TabId {
        match self {
            Self::Activated(id) | Self::Created(id) => id,
        }
    }
}

/// Tab key for a location.
///
/// Usually the pathname; routes that open distinct documents per query
/// parameter append `?key=value` when that parameter is present.
pub fn canonical_path(location: &Location, resolver: &dyn TabMetadataResolver) -> String {
    resolver
        .query_key(&location.path)
        .and_then(|key| {
            location
                .query_value(&key)
                .map(|value| format!("{}?{}={}", location.path, key, value))
        })
        .unwrap_or_else(|| location.path.clone())
}

impl TabManager {
    /// Synchronise the tab list with a route change.
    pub fn on_route_change(&mut self, location: &Location) -> RouteOutcome {
        let path = canonical_path(location, self.resolver.as_ref());

        if let Some(id) = self.tab_by_path(&path).map(|t| t.id.clone()) {
            self.active_tab_id = Some(id.clone());
            self.record_used(&id);
            self.notify_activated(&id);

            let before: Vec<TabId> = self.tabs.iter().map(|t| t.id.clone()).collect();
            apply_ordering(&mut self.tabs, &self.settings.home_path);
            if self.tabs.iter().map(|t| &t.id).ne(before.iter()) {
                self.persist();
            }
            return RouteOutcome::Activated(id);
        }

        let meta = self.resolver.resolve(&path);
        let title = if meta.loading_on_added {
            self.settings.loading_title.clone()
        } else {
            meta.title
        };

        let mut tab = Tab::new(path, title).with_icon(meta.icon_name);
        tab.grouped = meta.group.as_deref().is_some_and(|group| {
            self.tabs.iter().any(|t| {
                t.grouped && self.resolver.resolve(&t.path).group.as_deref() == Some(group)
            })
        });
        let id = tab.id.clone();
        log::info!(
            "Opened tab {} for '{}' (grouped={}, total: {})",
            id,
            tab.path,
            tab.grouped,
            self.tabs.len() + 1
        );

        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        self.commit();
        self.record_used(&id);
        self.notify_activated(&id);
        RouteOutcome::Created(id)
    }

    fn notify_activated(&mut self, id: &TabId) {
        let Some(listener) = self.activation_listener.as_mut() else {
            return;
        };
        if let Some(tab) = self.tabs.iter().find(|t| &t.id == id) {
            listener(tab);
        }
    }
}
