//! Key event matching.
//!
//! Matches winit logical keys plus modifier state against parsed [`KeyCombo`]s.
//! Hosts pass the pieces of their key event rather than the event itself, so
//! the matcher works for any frontend that speaks winit key types.

use crate::parser::{KeyCombo, Modifiers, ParsedKey};
use crate::platform::{physical_key_matches_char, resolve_cmd_or_ctrl};
use winit::keyboard::{Key, KeyCode, ModifiersState, NamedKey};

/// Matcher for comparing one key press against keybindings.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Active modifiers from the event
    modifiers: Modifiers,
    /// The logical key from the event
    key: Option<MatchKey>,
    /// The physical key code from the event, when the host knows it
    physical_key: Option<KeyCode>,
}

/// Normalized key for matching purposes.
#[derive(Debug)]
enum MatchKey {
    Character(char),
    Named(NamedKey),
}

impl KeybindingMatcher {
    /// Create a matcher from a logical key, an optional physical key code and
    /// the modifier state at the time of the press.
    pub fn new(logical_key: &Key, physical_key: Option<KeyCode>, state: ModifiersState) -> Self {
        let modifiers = Modifiers {
            ctrl: state.control_key(),
            alt: state.alt_key(),
            shift: state.shift_key(),
            super_key: state.super_key(),
            cmd_or_ctrl: false, // Resolved during matching
        };

        let key = match logical_key {
            Key::Character(c) => c
                .chars()
                .next()
                .map(|ch| MatchKey::Character(ch.to_ascii_uppercase())),
            Key::Named(named) => Some(MatchKey::Named(*named)),
            _ => None,
        };

        Self {
            modifiers,
            key,
            physical_key,
        }
    }

    /// Check if this key press matches the given combo.
    ///
    /// Character bindings fall back to the physical key position when the
    /// logical character differs, e.g. Option+W producing `∑` on macOS.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        let key_matches = match &combo.key {
            ParsedKey::Physical(code) => self.physical_key.as_ref() == Some(code),
            ParsedKey::Character(combo_char) => {
                let logical = matches!(
                    &self.key,
                    Some(MatchKey::Character(c)) if c.eq_ignore_ascii_case(combo_char)
                );
                logical
                    || self
                        .physical_key
                        .is_some_and(|code| physical_key_matches_char(code, *combo_char))
            }
            ParsedKey::Named(named) => {
                matches!(&self.key, Some(MatchKey::Named(n)) if n == named)
            }
        };

        key_matches && self.modifiers_match(&combo.modifiers)
    }

    /// Check if modifiers match, handling CmdOrCtrl specially.
    fn modifiers_match(&self, combo_mods: &Modifiers) -> bool {
        let (expected_ctrl, expected_super) =
            resolve_cmd_or_ctrl(combo_mods.cmd_or_ctrl, combo_mods.ctrl, combo_mods.super_key);

        self.modifiers.ctrl == expected_ctrl
            && self.modifiers.alt == combo_mods.alt
            && self.modifiers.shift == combo_mods.shift
            && self.modifiers.super_key == expected_super
    }
}
