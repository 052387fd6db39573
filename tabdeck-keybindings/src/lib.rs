//! Keybinding system for tabdeck.
//!
//! Turns configured shortcut strings into matchers for the tab strip's
//! keyboard actions.
//!
//! Features:
//! - Configurable key combinations (CmdOrCtrl+Alt+W, Ctrl+Shift+Right, etc.)
//! - `CmdOrCtrl` resolving to Cmd on macOS and Ctrl elsewhere
//! - Physical key fallback so bindings survive layout-altered characters

mod matcher;
pub mod parser;
pub mod platform;

pub use matcher::KeybindingMatcher;
pub use parser::{KeyCombo, ParseError, parse_key_combo};

use tabdeck_config::KeyBinding;
use winit::keyboard::{Key, KeyCode, ModifiersState};

/// Registry of keybindings mapping key combinations to action names.
///
/// Bindings are checked in configuration order; the first match wins.
#[derive(Debug, Default)]
pub struct KeybindingRegistry {
    bindings: Vec<(KeyCombo, String)>,
}

impl KeybindingRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from config keybindings.
    ///
    /// Invalid keybinding strings are logged and skipped.
    pub fn from_config(keybindings: &[KeyBinding]) -> Self {
        let mut registry = Self::new();

        for binding in keybindings {
            match parse_key_combo(&binding.key) {
                Ok(combo) => {
                    log::debug!(
                        "Registered keybinding: {} -> {} (parsed as: {})",
                        binding.key,
                        binding.action,
                        combo
                    );
                    registry.bindings.push((combo, binding.action.clone()));
                }
                Err(e) => {
                    log::warn!(
                        "Invalid keybinding '{}' for action '{}': {}",
                        binding.key,
                        binding.action,
                        e
                    );
                }
            }
        }

        log::info!(
            "Keybinding registry initialized with {} bindings",
            registry.bindings.len()
        );
        registry
    }

    /// Look up the action bound to a key press.
    pub fn lookup(
        &self,
        logical_key: &Key,
        physical_key: Option<KeyCode>,
        modifiers: ModifiersState,
    ) -> Option<&str> {
        let matcher = KeybindingMatcher::new(logical_key, physical_key, modifiers);
        self.bindings
            .iter()
            .find(|(combo, _)| matcher.matches(combo))
            .map(|(_, action)| action.as_str())
    }

    /// Combo bound to `action`, for displaying hints next to menu entries.
    pub fn combo_for(&self, action: &str) -> Option<&KeyCombo> {
        self.bindings
            .iter()
            .find(|(_, a)| a == action)
            .map(|(combo, _)| combo)
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
