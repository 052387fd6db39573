//! Session configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `Config` struct and its `Default` impl
//! - [`keybindings_methods`]: `impl Config` methods for keybinding management
//! - [`persistence`]: `impl Config` methods for load/save and path resolution
//! - [`validation`]: `impl Config` semantic checks

pub mod config_struct;
pub mod keybindings_methods;
pub mod persistence;
pub mod validation;

pub use config_struct::Config;
