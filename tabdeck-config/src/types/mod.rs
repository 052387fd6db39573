//! Configuration types shared across the workspace.

mod keybinding;
mod route;
mod storage;
mod tab_bar;

pub use keybinding::KeyBinding;
pub use route::RouteConfig;
pub use storage::StorageConfig;
pub use tab_bar::TabPosition;
