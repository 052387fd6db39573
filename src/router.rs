//! Navigation collaborator.
//!
//! The tab session never builds full URLs: it reads the current path plus a
//! flat list of query pairs and asks the [`Navigator`] to go somewhere else.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A route location: pathname plus ordered query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    /// Location with no query. Trailing slashes are trimmed except for `/`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parse `path?k=v&k2=v2`. Pairs without `=` get an empty value; empty
    /// pairs are skipped.
    pub fn parse(s: &str) -> Self {
        let (path, query) = s.split_once('?').unwrap_or((s, ""));
        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (k.to_string(), v.to_string())
            })
            .collect();
        Self {
            path: normalize_path(path),
            query,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}

/// Trim whitespace and trailing slashes and ensure a leading `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let with_root = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    match with_root.trim_end_matches('/') {
        "" => "/".to_string(),
        p => p.to_string(),
    }
}

/// Reads and drives the host's current route.
pub trait Navigator {
    fn current(&self) -> Location;
    fn navigate(&mut self, to: Location);
}

#[derive(Debug, Default)]
struct HistoryState {
    entries: Vec<Location>,
}

/// In-memory router keeping a navigation history.
///
/// Clones share the same history, so a host can keep one handle while the
/// session owns another.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    state: Arc<Mutex<HistoryState>>,
}

impl HistoryRouter {
    pub fn new(start: Location) -> Self {
        Self {
            state: Arc::new(Mutex::new(HistoryState {
                entries: vec![start],
            })),
        }
    }

    /// Every location visited, oldest first.
    pub fn history(&self) -> Vec<Location> {
        self.state.lock().entries.clone()
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new(Location::new("/"))
    }
}

impl Navigator for HistoryRouter {
    fn current(&self) -> Location {
        self.state.lock().entries.last().cloned().unwrap_or_default()
    }

    fn navigate(&mut self, to: Location) {
        log::debug!("Navigate to {}", to);
        self.state.lock().entries.push(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_path_forms() {
        assert_eq!(normalize_path("/dashboard/"), "/dashboard");
        assert_eq!(normalize_path("dashboard"), "/dashboard");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn parse_path_and_query() {
        let loc = Location::parse("/designer/?layout=4&mode");
        assert_eq!(loc.path, "/designer");
        assert_eq!(loc.query_value("layout"), Some("4"));
        assert_eq!(loc.query_value("mode"), Some(""));
        assert_eq!(loc.query_value("missing"), None);
    }

    #[test]
    fn normalization() {
        assert_eq!(Location::new("/").path, "/");
        assert_eq!(Location::new("").path, "/");
        assert_eq!(Location::new("sales/").path, "/sales");
    }

    #[test]
    fn display_roundtrips() {
        let loc = Location::new("/a").with_query("x", "1").with_query("y", "2");
        assert_eq!(loc.to_string(), "/a?x=1&y=2");
        assert_eq!(Location::parse(&loc.to_string()), loc);
    }

    #[test]
    fn history_router_shares_state() {
        let router = HistoryRouter::default();
        let mut handle = router.clone();
        handle.navigate(Location::new("/sales"));
        assert_eq!(router.current().path, "/sales");
        assert_eq!(router.history().len(), 2);
    }
}
