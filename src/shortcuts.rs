//! Keyboard shortcuts for the tab strip.
//!
//! Bindings come from the configuration (`CmdOrCtrl+Alt+W` and friends by
//! default) and resolve to a [`TabAction`] that the session dispatches.

use tabdeck_config::KeyBinding;
use tabdeck_keybindings::{KeyCombo, KeybindingRegistry};
use winit::keyboard::{Key, KeyCode, ModifiersState};

/// Tab actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabAction {
    CloseTab,
    NextTab,
    PrevTab,
}

impl TabAction {
    /// Parse an action name from a keybinding entry.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "close_tab" => Some(Self::CloseTab),
            "next_tab" => Some(Self::NextTab),
            "prev_tab" => Some(Self::PrevTab),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CloseTab => "close_tab",
            Self::NextTab => "next_tab",
            Self::PrevTab => "prev_tab",
        }
    }
}

/// Resolves key presses to tab actions.
#[derive(Debug)]
pub struct TabShortcuts {
    registry: KeybindingRegistry,
}

impl TabShortcuts {
    pub fn from_config(bindings: &[KeyBinding]) -> Self {
        for binding in bindings {
            if TabAction::from_name(&binding.action).is_none() {
                log::warn!(
                    "Keybinding '{}' names unknown tab action '{}'",
                    binding.key,
                    binding.action
                );
            }
        }
        Self {
            registry: KeybindingRegistry::from_config(bindings),
        }
    }

    /// Action bound to this key press, if any.
    pub fn resolve(
        &self,
        key: &Key,
        physical_key: Option<KeyCode>,
        modifiers: ModifiersState,
    ) -> Option<TabAction> {
        self.registry
            .lookup(key, physical_key, modifiers)
            .and_then(TabAction::from_name)
    }

    /// Combo bound to `action`, for menu hints.
    pub fn combo_for(&self, action: TabAction) -> Option<&KeyCombo> {
        self.registry.combo_for(action.name())
    }
}
