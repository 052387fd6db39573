//! Command-line interface for tabdeck.
//!
//! Each invocation mounts a tab session over a JSON session file, applies
//! one command and prints the resulting tab strip. The router location is
//! kept in the same file so consecutive invocations behave like one
//! continuous session.

use crate::clock::{Clock, SystemClock};
use crate::events::{AppEvent, EventBus, TitleUpdate};
use crate::router::{HistoryRouter, Location, Navigator};
use crate::session::TabSession;
use crate::tab::{RouteTable, TabId, TabManager};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tabdeck_config::{
    Config, JsonFileStore, Preferences, SharedStore, TabPosition, read_json, write_json,
};

/// Store key holding the router location between invocations
pub const LOCATION_KEY: &str = "tabdeck.location";

/// tabdeck - A route-synchronised tab session manager
#[derive(Parser, Debug)]
#[command(name = "tabdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: the user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Session file (default: from the configuration)
    #[arg(long, value_name = "PATH", global = true)]
    pub session: Option<PathBuf>,

    /// Log level written to the debug log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<log::LevelFilter>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the open tabs (default)
    List,
    /// Navigate to a route, opening a tab for it if needed
    Open {
        /// Path with optional query, e.g. /designer?layout=4
        location: String,
    },
    /// Activate a tab as if it was clicked
    Activate { tab: String },
    /// Close a tab
    Close { tab: String },
    /// Toggle pinning of a tab
    Pin { tab: String },
    /// Toggle grouping of a tab's configured group
    Group { tab: String },
    /// Drag a tab onto another
    Move { source: String, dest: String },
    /// Set the title of the tab at a path
    Title {
        path: String,
        title: String,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Switch to the next tab
    Next,
    /// Switch to the previous tab
    Prev,
    /// Sort tabs by module, group and sequence
    SortGroups,
    /// Close every tab except one
    CloseOthers { tab: String },
    /// Close every tab
    CloseAll,
    /// Show or change tab strip preferences
    Prefs {
        #[arg(long)]
        enabled: Option<bool>,
        #[arg(long, value_parser = parse_position)]
        position: Option<TabPosition>,
    },
}

fn parse_position(s: &str) -> Result<TabPosition, String> {
    TabPosition::parse(s).ok_or_else(|| format!("expected 'separate' or 'inline', got '{s}'"))
}

/// Everything one invocation works with.
pub struct CliContext {
    pub config: Config,
    pub store: SharedStore<JsonFileStore>,
    pub router: HistoryRouter,
    pub bus: EventBus,
    pub session: TabSession,
}

impl CliContext {
    /// Open the session file and mount a session at the stored location.
    pub fn open(config: Config, session_file: PathBuf, clock: Arc<dyn Clock>) -> Self {
        let store = SharedStore::new(JsonFileStore::open(session_file));
        let start = read_json::<String>(&store, LOCATION_KEY)
            .map(|s| Location::parse(&s))
            .unwrap_or_else(|| Location::new(config.home_path.as_str()));
        let router = HistoryRouter::new(start);
        let bus = EventBus::new();
        let session = TabSession::mount(
            &config,
            Box::new(store.clone()),
            Box::new(router.clone()),
            Arc::new(RouteTable::new(&config.routes)),
            clock,
            &bus,
        );
        Self {
            config,
            store,
            router,
            bus,
            session,
        }
    }

    /// Apply one command.
    pub fn execute(&mut self, command: &Commands) -> Result<()> {
        match command {
            Commands::List => {}
            Commands::Open { location } => {
                self.router.navigate(Location::parse(location));
                self.session.sync_route();
            }
            Commands::Activate { tab } => {
                let id = self.target(tab)?;
                self.session.click_tab(&id);
            }
            Commands::Close { tab } => {
                let id = self.target(tab)?;
                self.session.close_tab(&id);
            }
            Commands::Pin { tab } => {
                let id = self.target(tab)?;
                self.session.toggle_pin(&id);
            }
            Commands::Group { tab } => {
                let id = self.target(tab)?;
                if !self.session.toggle_group(&id) {
                    println!("Tab {} has no configured group", tab);
                }
            }
            Commands::Move { source, dest } => {
                let source = self.target(source)?;
                let dest = self.target(dest)?;
                self.session.begin_drag(&source);
                self.session.drop_on(&dest);
            }
            Commands::Title { path, title, icon } => {
                self.bus.publish(AppEvent::UpdateTabTitle(TitleUpdate {
                    path: path.clone(),
                    title: Some(title.clone()),
                    icon_name: icon.clone(),
                }));
                self.session.pump_events();
            }
            Commands::Next => {
                self.session.next_tab();
            }
            Commands::Prev => {
                self.session.prev_tab();
            }
            Commands::SortGroups => self.session.sort_by_group(),
            Commands::CloseOthers { tab } => {
                let id = self.target(tab)?;
                self.session.close_others(&id);
            }
            Commands::CloseAll => {
                self.session.close_all();
            }
            Commands::Prefs { enabled, position } => self.update_preferences(*enabled, *position)?,
        }
        Ok(())
    }

    fn update_preferences(
        &mut self,
        enabled: Option<bool>,
        position: Option<TabPosition>,
    ) -> Result<()> {
        let mut prefs = Preferences::load(&self.store, &self.config.storage);
        if let Some(enabled) = enabled {
            prefs.tabs_enabled = enabled;
            self.bus.publish(AppEvent::TabsPreferenceChanged { enabled });
        }
        if let Some(position) = position {
            prefs.tab_position = position;
            self.bus.publish(AppEvent::TabPositionChanged { position });
        }
        prefs
            .save(&mut self.store, &self.config.storage)
            .context("Failed to save preferences")?;
        self.session.pump_events();
        Ok(())
    }

    /// Persist the router location for the next invocation.
    pub fn finish(&mut self) -> Result<()> {
        let location = self.router.current().to_string();
        write_json(&mut self.store, LOCATION_KEY, &location)
            .context("Failed to save router location")?;
        Ok(())
    }

    fn target(&self, needle: &str) -> Result<TabId> {
        match resolve_tab(self.session.manager(), needle) {
            Some(id) => Ok(id),
            None => bail!("No open tab matches '{}'", needle),
        }
    }
}

/// Resolve a tab by id, by path or by 1-based position.
pub fn resolve_tab(manager: &TabManager, needle: &str) -> Option<TabId> {
    let id = TabId::from(needle);
    if manager.get_tab(&id).is_some() {
        return Some(id);
    }
    if let Some(tab) = manager.tab_by_path(needle) {
        return Some(tab.id.clone());
    }
    let position: usize = needle.parse().ok()?;
    manager
        .tabs()
        .get(position.checked_sub(1)?)
        .map(|t| t.id.clone())
}

/// Render the tab strip as a table.
pub fn format_tabs(session: &TabSession) -> String {
    let manager = session.manager();
    let prefs = session.preferences();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tabs: {} (enabled: {}, position: {})",
        manager.len(),
        prefs.tabs_enabled,
        prefs.tab_position
    );
    for (i, tab) in manager.tabs().iter().enumerate() {
        let active = if manager.active_tab_id() == Some(&tab.id) {
            '*'
        } else {
            ' '
        };
        let pinned = if tab.pinned { 'P' } else { '-' };
        let grouped = if tab.grouped { 'G' } else { '-' };
        let _ = writeln!(
            out,
            "{active}{:>3} {pinned}{grouped} {:<28} {} [{}]",
            i + 1,
            tab.path,
            tab.title,
            tab.id
        );
    }
    out
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    let session_file = cli
        .session
        .clone()
        .unwrap_or_else(|| config.storage.session_file.clone());
    if session_file.as_os_str().is_empty() {
        bail!("No session file configured");
    }

    let mut ctx = CliContext::open(config, session_file, Arc::new(SystemClock));
    let command = cli.command.unwrap_or(Commands::List);
    ctx.execute(&command)?;
    ctx.finish()?;
    print!("{}", format_tabs(&ctx.session));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use tabdeck_config::RouteConfig;
    use tempfile::TempDir;

    fn config() -> Config {
        Config {
            routes: vec![
                RouteConfig::new("/", "Home"),
                RouteConfig::new("/bookings/:id", "Booking {id}").with_group("Bookings"),
            ],
            ..Config::default()
        }
    }

    fn open(dir: &TempDir) -> CliContext {
        CliContext::open(
            config(),
            dir.path().join("session.json"),
            Arc::new(ManualClock::new(1)),
        )
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::parse_from(["tabdeck", "--session", "/tmp/s.json", "move", "1", "3"]);
        assert_eq!(
            cli.command,
            Some(Commands::Move {
                source: "1".into(),
                dest: "3".into()
            })
        );
        let cli = Cli::parse_from(["tabdeck", "prefs", "--position", "inline"]);
        assert_eq!(
            cli.command,
            Some(Commands::Prefs {
                enabled: None,
                position: Some(TabPosition::Inline)
            })
        );
        assert!(Cli::try_parse_from(["tabdeck", "prefs", "--position", "left"]).is_err());
    }

    #[test]
    fn invocations_share_state_through_session_file() {
        let dir = TempDir::new().unwrap();
        let mut ctx = open(&dir);
        assert_eq!(ctx.session.manager().len(), 1);
        ctx.execute(&Commands::Open {
            location: "/bookings/4".into(),
        })
        .unwrap();
        ctx.finish().unwrap();

        let ctx = open(&dir);
        let manager = ctx.session.manager();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.active_tab().map(|t| t.path.as_str()), Some("/bookings/4"));
    }

    #[test]
    fn targets_resolve_by_id_path_and_position() {
        let dir = TempDir::new().unwrap();
        let mut ctx = open(&dir);
        ctx.execute(&Commands::Open {
            location: "/sales".into(),
        })
        .unwrap();
        let manager = ctx.session.manager();
        let sales = manager.tab_by_path("/sales").unwrap().id.clone();
        assert_eq!(resolve_tab(manager, "/sales"), Some(sales.clone()));
        assert_eq!(resolve_tab(manager, sales.as_str()), Some(sales.clone()));
        assert_eq!(resolve_tab(manager, "2"), Some(sales));
        assert_eq!(resolve_tab(manager, "0"), None);
        assert_eq!(resolve_tab(manager, "9"), None);
        assert!(ctx.execute(&Commands::Close { tab: "9".into() }).is_err());
    }

    #[test]
    fn title_goes_through_event_bus() {
        let dir = TempDir::new().unwrap();
        let mut ctx = open(&dir);
        ctx.execute(&Commands::Title {
            path: "/".into(),
            title: "Dashboard".into(),
            icon: None,
        })
        .unwrap();
        assert_eq!(ctx.session.manager().tabs()[0].title, "Dashboard");
        assert!(format_tabs(&ctx.session).contains("Dashboard"));
    }

    #[test]
    fn prefs_are_saved_and_applied() {
        let dir = TempDir::new().unwrap();
        let mut ctx = open(&dir);
        ctx.execute(&Commands::Prefs {
            enabled: Some(false),
            position: Some(TabPosition::Inline),
        })
        .unwrap();
        assert!(!ctx.session.is_visible());
        assert_eq!(ctx.session.preferences().tab_position, TabPosition::Inline);

        let reopened = open(&dir);
        assert!(!reopened.session.preferences().tabs_enabled);
    }
}
