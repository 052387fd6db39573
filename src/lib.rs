// Library exports for testing and embedding
//
// The tab session runs on a single logical thread: every mutation happens
// synchronously inside a host event handler. `parking_lot::Mutex` is used
// only where handles are shared between the host and the session (router
// history, event bus buffers, shared stores).

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod click_guard;
pub mod clock;
pub mod debug;
pub mod events;
pub mod router;
pub mod scroller;
pub mod session;
pub mod shortcuts;
pub mod tab;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{AppEvent, EventBus, EventKind, Subscription, TitleUpdate};
pub use router::{HistoryRouter, Location, Navigator, normalize_path};
pub use scroller::{ScrollCommand, StripLayout, TabExtent, ViewportScroller};
pub use session::TabSession;
pub use shortcuts::{TabAction, TabShortcuts};
pub use tab::{RouteOutcome, RouteTable, Tab, TabId, TabManager, TabMetadata, TabMetadataResolver};
