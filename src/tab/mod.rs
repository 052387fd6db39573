//! Tab management for the route-synchronised tab strip
//!
//! This module provides the core tab infrastructure including:
//! - `Tab`: One open document, keyed by its canonical route path
//! - `TabId`: Opaque identifier, generated once and never reused
//! - `TabManager`: The tab store and its interaction handlers
//! - `ordering`: The sort policies applied after every mutation
//! - `recency`: Last-used timestamps driving close selection
//! - `route_sync`: Turning route changes into tab activations
//! - `metadata`: Resolving titles, icons and groups from the route table

mod manager;
pub mod metadata;
pub mod ordering;
pub mod persistence;
pub mod recency;
pub mod route_sync;

pub use manager::{ActivationListener, ManagerSettings, TabManager};
pub use metadata::{RouteTable, TabMetadata, TabMetadataResolver};
pub use recency::RecencyTracker;
pub use route_sync::{RouteOutcome, canonical_path};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a tab.
///
/// Freshly created tabs get a v4 UUID; ids loaded from storage are kept
/// verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Generate a new, never-before-seen id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One open document in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    /// Canonical route key, unique within the tab list
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    /// Pinned tabs render icon-only and sort before unpinned ones
    #[serde(default)]
    pub pinned: bool,
    /// Member of a linked cluster sharing a configured group
    #[serde(default)]
    pub grouped: bool,
    /// Host payload carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Tab {
    /// Create a new tab with a fresh id.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: TabId::generate(),
            path: path.into(),
            title: title.into(),
            icon_name: None,
            pinned: false,
            grouped: false,
            data: None,
        }
    }

    pub fn with_icon(mut self, icon_name: Option<String>) -> Self {
        self.icon_name = icon_name;
        self
    }

    /// True when this tab is the home route.
    pub fn is_home(&self, home_path: &str) -> bool {
        self.path == home_path
    }
}
