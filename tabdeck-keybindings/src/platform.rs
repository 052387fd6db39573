//! Platform-specific keybinding resolution.
//!
//! Contains:
//! - `CmdOrCtrl` modifier expansion (Cmd on macOS, Ctrl elsewhere)
//! - Key name tables shared by the parser and the matcher

use winit::keyboard::{KeyCode, NamedKey};

/// Resolve the `CmdOrCtrl` modifier for the current platform.
///
/// Returns `(expected_ctrl, expected_super)` given a `cmd_or_ctrl` flag and the
/// raw `ctrl`/`super_key` values from the parsed combo.
///
/// - macOS: `CmdOrCtrl` maps to Super (Cmd key).
/// - All other platforms: `CmdOrCtrl` maps to Ctrl.
#[inline]
pub fn resolve_cmd_or_ctrl(cmd_or_ctrl: bool, ctrl: bool, super_key: bool) -> (bool, bool) {
    if cmd_or_ctrl {
        #[cfg(target_os = "macos")]
        {
            (ctrl, true)
        }
        #[cfg(not(target_os = "macos"))]
        {
            (true, super_key)
        }
    } else {
        (ctrl, super_key)
    }
}

/// Named keys and their accepted aliases (matched case-insensitively).
const NAMED_KEYS: &[(&[&str], NamedKey)] = &[
    (&["enter", "return"], NamedKey::Enter),
    (&["escape", "esc"], NamedKey::Escape),
    (&["space"], NamedKey::Space),
    (&["tab"], NamedKey::Tab),
    (&["backspace"], NamedKey::Backspace),
    (&["delete", "del"], NamedKey::Delete),
    (&["home"], NamedKey::Home),
    (&["end"], NamedKey::End),
    (&["pageup", "pgup"], NamedKey::PageUp),
    (&["pagedown", "pgdn"], NamedKey::PageDown),
    (&["up", "arrowup"], NamedKey::ArrowUp),
    (&["down", "arrowdown"], NamedKey::ArrowDown),
    (&["left", "arrowleft"], NamedKey::ArrowLeft),
    (&["right", "arrowright"], NamedKey::ArrowRight),
    (&["f1"], NamedKey::F1),
    (&["f2"], NamedKey::F2),
    (&["f3"], NamedKey::F3),
    (&["f4"], NamedKey::F4),
    (&["f5"], NamedKey::F5),
    (&["f6"], NamedKey::F6),
    (&["f7"], NamedKey::F7),
    (&["f8"], NamedKey::F8),
    (&["f9"], NamedKey::F9),
    (&["f10"], NamedKey::F10),
    (&["f11"], NamedKey::F11),
    (&["f12"], NamedKey::F12),
];

/// Physical key codes, their config names, and the character they produce on
/// a US QWERTY layout.
const PHYSICAL_KEYS: &[(&str, KeyCode, char)] = &[
    ("keya", KeyCode::KeyA, 'A'),
    ("keyb", KeyCode::KeyB, 'B'),
    ("keyc", KeyCode::KeyC, 'C'),
    ("keyd", KeyCode::KeyD, 'D'),
    ("keye", KeyCode::KeyE, 'E'),
    ("keyf", KeyCode::KeyF, 'F'),
    ("keyg", KeyCode::KeyG, 'G'),
    ("keyh", KeyCode::KeyH, 'H'),
    ("keyi", KeyCode::KeyI, 'I'),
    ("keyj", KeyCode::KeyJ, 'J'),
    ("keyk", KeyCode::KeyK, 'K'),
    ("keyl", KeyCode::KeyL, 'L'),
    ("keym", KeyCode::KeyM, 'M'),
    ("keyn", KeyCode::KeyN, 'N'),
    ("keyo", KeyCode::KeyO, 'O'),
    ("keyp", KeyCode::KeyP, 'P'),
    ("keyq", KeyCode::KeyQ, 'Q'),
    ("keyr", KeyCode::KeyR, 'R'),
    ("keys", KeyCode::KeyS, 'S'),
    ("keyt", KeyCode::KeyT, 'T'),
    ("keyu", KeyCode::KeyU, 'U'),
    ("keyv", KeyCode::KeyV, 'V'),
    ("keyw", KeyCode::KeyW, 'W'),
    ("keyx", KeyCode::KeyX, 'X'),
    ("keyy", KeyCode::KeyY, 'Y'),
    ("keyz", KeyCode::KeyZ, 'Z'),
    ("digit0", KeyCode::Digit0, '0'),
    ("digit1", KeyCode::Digit1, '1'),
    ("digit2", KeyCode::Digit2, '2'),
    ("digit3", KeyCode::Digit3, '3'),
    ("digit4", KeyCode::Digit4, '4'),
    ("digit5", KeyCode::Digit5, '5'),
    ("digit6", KeyCode::Digit6, '6'),
    ("digit7", KeyCode::Digit7, '7'),
    ("digit8", KeyCode::Digit8, '8'),
    ("digit9", KeyCode::Digit9, '9'),
    ("minus", KeyCode::Minus, '-'),
    ("equal", KeyCode::Equal, '='),
    ("bracketleft", KeyCode::BracketLeft, '['),
    ("bracketright", KeyCode::BracketRight, ']'),
    ("comma", KeyCode::Comma, ','),
    ("period", KeyCode::Period, '.'),
    ("slash", KeyCode::Slash, '/'),
];

/// Parse a named key string into a [`NamedKey`].
///
/// Accepts aliases such as `"Esc"`, `"PgUp"`, `"Left"`. Returns `None` for
/// unrecognised strings.
pub fn parse_named_key(s: &str) -> Option<NamedKey> {
    let lower = s.to_lowercase();
    NAMED_KEYS
        .iter()
        .find(|(aliases, _)| aliases.contains(&lower.as_str()))
        .map(|(_, key)| *key)
}

/// Parse a physical key code name such as `"KeyW"` or `"Digit1"`.
pub fn parse_physical_key_code(s: &str) -> Option<KeyCode> {
    let lower = s.to_lowercase();
    PHYSICAL_KEYS
        .iter()
        .find(|(name, _, _)| *name == lower)
        .map(|(_, code, _)| *code)
}

/// Check if a physical key code produces `ch` on a QWERTY layout.
///
/// Lets character bindings keep working when a modifier (Option on macOS)
/// changes the logical character the key produces.
pub fn physical_key_matches_char(code: KeyCode, ch: char) -> bool {
    PHYSICAL_KEYS
        .iter()
        .find(|(_, c, _)| *c == code)
        .is_some_and(|(_, _, expected)| expected.eq_ignore_ascii_case(&ch))
}
