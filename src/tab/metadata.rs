//! Route metadata: titles, icons and groups for tab paths.
//!
//! Resolution is driven by the static route table from the configuration.
//! Patterns use `:name` for a single path segment and `*` for any suffix;
//! `{name}` in a route title is replaced with the captured segment.

use regex::Regex;
use tabdeck_config::RouteConfig;

/// Metadata resolved for a single path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabMetadata {
    pub title: String,
    pub icon_name: Option<String>,
    pub group: Option<String>,
    pub module: Option<String>,
    pub sequence: Option<u32>,
    /// The real title arrives later through a title-update event
    pub loading_on_added: bool,
}

/// Resolves display metadata for tab paths.
///
/// Implementations must be deterministic for a given path.
pub trait TabMetadataResolver {
    fn resolve(&self, path: &str) -> TabMetadata;

    /// Query parameter that distinguishes documents sharing `pathname`.
    fn query_key(&self, pathname: &str) -> Option<String>;
}

struct CompiledRoute {
    regex: Regex,
    route: RouteConfig,
}

/// [`TabMetadataResolver`] backed by the configured route table.
///
/// Routes are tried in configuration order; the first match wins.
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Compile the route table. Patterns that fail to compile are logged and
    /// skipped.
    pub fn new(routes: &[RouteConfig]) -> Self {
        let routes = routes
            .iter()
            .filter_map(|route| match compile_pattern(&route.pattern) {
                Ok(regex) => Some(CompiledRoute {
                    regex,
                    route: route.clone(),
                }),
                Err(e) => {
                    log::warn!("Skipping route pattern '{}': {}", route.pattern, e);
                    None
                }
            })
            .collect();
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn find<'a, 'p>(
        &'a self,
        pathname: &'p str,
    ) -> Option<(&'a CompiledRoute, regex::Captures<'p>)> {
        self.routes
            .iter()
            .find_map(|compiled| compiled.regex.captures(pathname).map(|caps| (compiled, caps)))
    }
}

impl TabMetadataResolver for RouteTable {
    fn resolve(&self, path: &str) -> TabMetadata {
        let pathname = strip_query(path);
        let Some((compiled, caps)) = self.find(pathname) else {
            return TabMetadata {
                title: fallback_title(pathname),
                ..TabMetadata::default()
            };
        };

        let mut title = compiled.route.title.clone();
        for name in compiled.regex.capture_names().flatten() {
            if let Some(value) = caps.name(name) {
                title = title.replace(&format!("{{{name}}}"), value.as_str());
            }
        }

        TabMetadata {
            title,
            icon_name: compiled.route.icon.clone(),
            group: compiled.route.group.clone(),
            module: compiled.route.module.clone(),
            sequence: compiled.route.sequence,
            loading_on_added: compiled.route.loading_on_added,
        }
    }

    fn query_key(&self, pathname: &str) -> Option<String> {
        self.find(strip_query(pathname))
            .and_then(|(compiled, _)| compiled.route.query_key.clone())
    }
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(pathname, _)| pathname)
}

/// Translate a route pattern into an anchored regex.
fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::from("^");
    for (i, segment) in pattern.split('/').enumerate() {
        if i > 0 {
            source.push('/');
        }
        if let Some(name) = segment.strip_prefix(':') {
            source.push_str(&format!("(?P<{name}>[^/]+)"));
        } else if segment == "*" {
            source.push_str(".*");
        } else {
            source.push_str(&regex::escape(segment));
        }
    }
    source.push('$');
    Regex::new(&source)
}

/// Title for paths the route table does not know: the humanized last segment.
fn fallback_title(pathname: &str) -> String {
    let last = pathname.rsplit('/').find(|s| !s.is_empty());
    let Some(last) = last else {
        return "Home".to_string();
    };
    let words = last.replace(['-', '_'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Home".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(&[
            RouteConfig::new("/", "Home").with_icon("home"),
            RouteConfig::new("/bookings", "Bookings")
                .with_icon("calendar")
                .with_group("Bookings")
                .with_module("sales")
                .with_sequence(1),
            RouteConfig::new("/bookings/:id", "Booking {id}")
                .with_icon("calendar")
                .with_group("Bookings")
                .with_module("sales")
                .with_sequence(2)
                .with_loading_on_added(),
            RouteConfig::new("/designer", "Designer").with_query_key("layout"),
            RouteConfig::new("/admin/*", "Admin"),
        ])
    }

    #[test]
    fn exact_route() {
        let meta = table().resolve("/bookings");
        assert_eq!(meta.title, "Bookings");
        assert_eq!(meta.icon_name.as_deref(), Some("calendar"));
        assert_eq!(meta.group.as_deref(), Some("Bookings"));
        assert_eq!(meta.sequence, Some(1));
        assert!(!meta.loading_on_added);
    }

    #[test]
    fn param_route_substitutes_title() {
        let meta = table().resolve("/bookings/42");
        assert_eq!(meta.title, "Booking 42");
        assert!(meta.loading_on_added);
    }

    #[test]
    fn param_does_not_span_segments() {
        let meta = table().resolve("/bookings/42/edit");
        assert_eq!(meta.title, "Edit");
        assert_eq!(meta.group, None);
    }

    #[test]
    fn wildcard_and_query() {
        let t = table();
        assert_eq!(t.resolve("/admin/users/7").title, "Admin");
        assert_eq!(t.resolve("/designer?layout=9").title, "Designer");
        assert_eq!(t.query_key("/designer").as_deref(), Some("layout"));
        assert_eq!(t.query_key("/bookings"), None);
    }

    #[test]
    fn miss_degrades_to_humanized_title() {
        let t = table();
        let meta = t.resolve("/stock-levels");
        assert_eq!(meta.title, "Stock levels");
        assert_eq!(meta.icon_name, None);
        assert_eq!(meta.group, None);
        assert_eq!(RouteTable::new(&[]).resolve("/").title, "Home");
    }

    #[test]
    fn literal_characters_are_escaped() {
        let t = RouteTable::new(&[RouteConfig::new("/a.b", "Dotted")]);
        assert_eq!(t.resolve("/a.b").title, "Dotted");
        assert_ne!(t.resolve("/axb").title, "Dotted");
    }

    #[test]
    fn first_match_wins() {
        let t = RouteTable::new(&[
            RouteConfig::new("/items/:id", "Item {id}"),
            RouteConfig::new("/items/new", "New item"),
        ]);
        assert_eq!(t.resolve("/items/new").title, "Item new");
    }
}
