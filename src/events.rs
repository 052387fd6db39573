//! Application-wide event bus.
//!
//! Other parts of the host publish [`AppEvent`]s (entity titles arriving
//! after load, preference changes from the settings screen). Each
//! [`Subscription`] buffers the events it is interested in until its owner
//! drains them on the next turn of the event loop.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Weak};
use tabdeck_config::TabPosition;

/// Payload of an `update-tab-title` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleUpdate {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

/// Events consumed by the tab session.
///
/// Serialized as `{"type": "<kebab-name>", "detail": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "kebab-case")]
pub enum AppEvent {
    UpdateTabTitle(TitleUpdate),
    TabsPreferenceChanged { enabled: bool },
    TabPositionChanged { position: TabPosition },
}

/// Event kind, used for subscription filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    UpdateTabTitle,
    TabsPreferenceChanged,
    TabPositionChanged,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::UpdateTabTitle => "update-tab-title",
            Self::TabsPreferenceChanged => "tabs-preference-changed",
            Self::TabPositionChanged => "tab-position-changed",
        }
    }

    pub fn all() -> &'static [EventKind] {
        &[
            Self::UpdateTabTitle,
            Self::TabsPreferenceChanged,
            Self::TabPositionChanged,
        ]
    }
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::UpdateTabTitle(_) => EventKind::UpdateTabTitle,
            Self::TabsPreferenceChanged { .. } => EventKind::TabsPreferenceChanged,
            Self::TabPositionChanged { .. } => EventKind::TabPositionChanged,
        }
    }

    /// Build an event from its name and JSON detail, as dispatched by hosts
    /// that only speak untyped events.
    pub fn from_parts(name: &str, detail: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::json!({ "type": name, "detail": detail }))
    }
}

struct Subscriber {
    /// `None` means every event
    filter: Option<HashSet<EventKind>>,
    buffer: Mutex<Vec<AppEvent>>,
}

/// Publish/subscribe hub shared across the host.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Weak<Subscriber>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `kinds`, or to everything when `None`.
    pub fn subscribe(&self, kinds: Option<&[EventKind]>) -> Subscription {
        let subscriber = Arc::new(Subscriber {
            filter: kinds.map(|k| k.iter().copied().collect()),
            buffer: Mutex::new(Vec::new()),
        });
        self.subscribers.lock().push(Arc::downgrade(&subscriber));
        Subscription { subscriber }
    }

    /// Deliver `event` to every live subscriber whose filter accepts it.
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, event: AppEvent) -> usize {
        let kind = event.kind();
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|weak| weak.strong_count() > 0);

        let mut delivered = 0;
        for subscriber in subscribers.iter().filter_map(Weak::upgrade) {
            if subscriber
                .filter
                .as_ref()
                .is_some_and(|filter| !filter.contains(&kind))
            {
                continue;
            }
            subscriber.buffer.lock().push(event.clone());
            delivered += 1;
        }
        log::debug!("Published {} to {} subscribers", kind.name(), delivered);
        delivered
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Handle to a buffered subscription. Dropping it unsubscribes.
pub struct Subscription {
    subscriber: Arc<Subscriber>,
}

impl Subscription {
    /// Take every buffered event, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        std::mem::take(&mut *self.subscriber.buffer.lock())
    }

    pub fn has_pending(&self) -> bool {
        !self.subscriber.buffer.lock().is_empty()
    }
}
