//! Integration tests for tabdeck-keybindings.
//!
//! These exercise the config -> registry -> lookup pipeline with the default
//! tab shortcuts.

use tabdeck_config::{Config, KeyBinding};
use tabdeck_keybindings::{KeybindingRegistry, parser::ParsedKey, parse_key_combo};
use winit::keyboard::{Key, KeyCode, ModifiersState, NamedKey};

fn primary() -> ModifiersState {
    if cfg!(target_os = "macos") {
        ModifiersState::SUPER
    } else {
        ModifiersState::CONTROL
    }
}

// ---------------------------------------------------------------------------
// Registry construction
// ---------------------------------------------------------------------------

#[test]
fn registry_from_empty_config() {
    let registry = KeybindingRegistry::from_config(&[]);
    assert!(registry.is_empty());
}

#[test]
fn default_bindings_all_parse() {
    let config = Config::default();
    let registry = KeybindingRegistry::from_config(&config.keybindings);
    assert_eq!(registry.len(), config.keybindings.len());
    for action in ["close_tab", "next_tab", "prev_tab"] {
        assert!(registry.combo_for(action).is_some(), "missing {action}");
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn default_close_binding_matches_platform_modifier() {
    let registry = KeybindingRegistry::from_config(&Config::default().keybindings);
    let key: Key = Key::Character("w".into());

    assert_eq!(
        registry.lookup(&key, Some(KeyCode::KeyW), primary() | ModifiersState::ALT),
        Some("close_tab")
    );
    assert_eq!(registry.lookup(&key, Some(KeyCode::KeyW), primary()), None);
}

#[test]
fn default_arrow_bindings() {
    let registry = KeybindingRegistry::from_config(&Config::default().keybindings);
    let mods = primary() | ModifiersState::ALT;

    let right: Key = Key::Named(NamedKey::ArrowRight);
    let left: Key = Key::Named(NamedKey::ArrowLeft);
    let up: Key = Key::Named(NamedKey::ArrowUp);

    assert_eq!(registry.lookup(&right, None, mods), Some("next_tab"));
    assert_eq!(registry.lookup(&left, None, mods), Some("prev_tab"));
    assert_eq!(registry.lookup(&up, None, mods), None);
}

#[test]
fn custom_binding_overrides_nothing_else() {
    let bindings = vec![KeyBinding::new("Shift+F2", "close_tab")];
    let registry = KeybindingRegistry::from_config(&bindings);
    let f2: Key = Key::Named(NamedKey::F2);

    assert_eq!(
        registry.lookup(&f2, None, ModifiersState::SHIFT),
        Some("close_tab")
    );
    assert_eq!(registry.lookup(&f2, None, ModifiersState::empty()), None);
}

// ---------------------------------------------------------------------------
// Parser surface
// ---------------------------------------------------------------------------

#[test]
fn parser_exposes_key_kinds() {
    assert_eq!(
        parse_key_combo("Alt+PgDn").unwrap().key,
        ParsedKey::Named(NamedKey::PageDown)
    );
    assert_eq!(
        parse_key_combo("Alt+[Digit1]").unwrap().key,
        ParsedKey::Physical(KeyCode::Digit1)
    );
}
