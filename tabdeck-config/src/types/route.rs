//! Static route table entries used to resolve tab metadata.

use serde::{Deserialize, Serialize};

/// One entry of the route table.
///
/// `pattern` is a pathname template where segments starting with `:` match
/// any single segment and a trailing `*` matches the rest of the path,
/// e.g. `/bookings/:id` or `/reports/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Pathname template
    pub pattern: String,
    /// Tab title for matching paths
    pub title: String,
    /// Symbolic icon name, resolved by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Group label shared by linked tabs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Application module the route belongs to (used by group sort)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Position within the group (used by group sort)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    /// Show the placeholder title until the host publishes the real one
    #[serde(default)]
    pub loading_on_added: bool,
    /// Query parameter that makes otherwise identical paths distinct documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_key: Option<String>,
}

impl RouteConfig {
    /// Create a route with only a pattern and title.
    pub fn new(pattern: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            title: title.into(),
            icon: None,
            group: None,
            module: None,
            sequence: None,
            loading_on_added: false,
            query_key: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn with_loading_on_added(mut self) -> Self {
        self.loading_on_added = true;
        self
    }

    pub fn with_query_key(mut self, key: impl Into<String>) -> Self {
        self.query_key = Some(key.into());
        self
    }
}
