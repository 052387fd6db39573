//! Shared integration test helpers for tabdeck.
//!
//! ```ignore
//! mod common;
//! use common::TestSession;
//! ```
//!
//! Rust integration tests use `mod common;` (not `use`) to bring in helpers
//! from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute suppresses
//! warnings when only a subset of helpers is used per file.

#![allow(dead_code)]

use std::sync::Arc;
use tabdeck::{
    EventBus, HistoryRouter, Location, ManualClock, Navigator, RouteTable, Tab, TabId, TabSession,
};
use tabdeck_config::{Config, MemoryStore, RouteConfig, SharedStore};

/// Route table used across the suite.
///
/// Bookings routes share the "Bookings" group; booking details load their
/// title asynchronously; the designer opens one document per `layout`.
pub fn test_config() -> Config {
    Config {
        routes: vec![
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
            RouteConfig::new("/sales", "Sales").with_icon("cart").with_module("sales"),
            RouteConfig::new("/stock", "Stock").with_module("inventory"),
            RouteConfig::new("/designer", "Designer").with_query_key("layout"),
        ],
        module_order: vec!["sales".to_string(), "inventory".to_string()],
        ..Config::default()
    }
}

/// A mounted session over an in-memory store, with handles to every
/// collaborator so tests can drive and inspect them.
pub struct TestSession {
    pub session: TabSession,
    pub router: HistoryRouter,
    pub clock: Arc<ManualClock>,
    pub store: SharedStore<MemoryStore>,
    pub bus: EventBus,
    pub config: Config,
}

impl TestSession {
    /// Mount at the home route.
    pub fn new() -> Self {
        Self::with_store(SharedStore::new(MemoryStore::new()), Location::new("/"))
    }

    /// Mount over an existing store at `start`.
    pub fn with_store(store: SharedStore<MemoryStore>, start: Location) -> Self {
        Self::with_config(test_config(), store, start)
    }

    /// Mount with a custom configuration.
    pub fn with_config(config: Config, store: SharedStore<MemoryStore>, start: Location) -> Self {
        let router = HistoryRouter::new(start);
        let clock = Arc::new(ManualClock::new(1_000));
        let bus = EventBus::new();
        let session = TabSession::mount(
            &config,
            Box::new(store.clone()),
            Box::new(router.clone()),
            Arc::new(RouteTable::new(&config.routes)),
            clock.clone(),
            &bus,
        );
        Self {
            session,
            router,
            clock,
            store,
            bus,
            config,
        }
    }

    /// Mount a fresh session over the same store, at the current location.
    pub fn remount(&self) -> Self {
        Self::with_store(self.store.clone(), self.router.current())
    }

    /// Navigate the host router and notify the session, as a host does on
    /// every route change.
    ///
    /// The clock ticks first so every navigation has a distinct timestamp.
    pub fn navigate(&mut self, location: &str) -> TabId {
        self.clock.advance(10);
        let location = Location::parse(location);
        self.router.clone().navigate(location.clone());
        self.session.on_route_change(&location);
        self.session
            .manager()
            .active_tab_id()
            .cloned()
            .expect("navigation leaves an active tab")
    }

    pub fn tabs(&self) -> &[Tab] {
        self.session.manager().tabs()
    }

    pub fn paths(&self) -> Vec<String> {
        self.tabs().iter().map(|t| t.path.clone()).collect()
    }

    pub fn active_path(&self) -> Option<String> {
        self.session.manager().active_tab().map(|t| t.path.clone())
    }

    pub fn id_of(&self, path: &str) -> TabId {
        self.session
            .manager()
            .tab_by_path(path)
            .map(|t| t.id.clone())
            .unwrap_or_else(|| panic!("no tab for {path}"))
    }

    /// Active id is valid when tabs exist, and absent otherwise.
    pub fn assert_active_valid(&self) {
        let manager = self.session.manager();
        match manager.active_tab_id() {
            Some(id) => assert!(manager.get_tab(id).is_some(), "dangling active id {id}"),
            None => assert!(manager.is_empty(), "tabs open but none active"),
        }
    }

    /// No two tabs share a path.
    pub fn assert_unique_paths(&self) {
        let mut paths = self.paths();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total, "duplicate tab paths: {:?}", self.paths());
    }
}
