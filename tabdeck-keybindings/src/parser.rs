//! Key combination parser.
//!
//! Parses human-readable key strings like "CmdOrCtrl+Alt+W" into [`KeyCombo`]s.
//! Physical key codes in brackets (e.g. "Ctrl+[KeyW]") match by key position.

use crate::platform::{parse_named_key, parse_physical_key_code};
use std::fmt;
use winit::keyboard::{KeyCode, NamedKey};

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Set of active modifiers for a key combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
    /// If true, this represents CmdOrCtrl (Cmd on macOS, Ctrl elsewhere)
    pub cmd_or_ctrl: bool,
}

/// A parsed key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.modifiers.cmd_or_ctrl, "CmdOrCtrl"),
            (self.modifiers.ctrl, "Ctrl"),
            (self.modifiers.alt, "Alt"),
            (self.modifiers.shift, "Shift"),
            (self.modifiers.super_key, "Super"),
        ];
        let mut parts: Vec<String> = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| name.to_string())
            .collect();

        parts.push(match &self.key {
            ParsedKey::Character(c) => c.to_string(),
            ParsedKey::Named(n) => format!("{:?}", n),
            ParsedKey::Physical(k) => format!("[{:?}]", k),
        });

        write!(f, "{}", parts.join("+"))
    }
}

/// The actual key (character, named key or physical position).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedKey {
    /// A single character key, stored uppercased
    Character(char),
    /// A named key (e.g., ArrowRight, F1)
    Named(NamedKey),
    /// A physical key code, matched by position rather than produced character
    Physical(KeyCode),
}

/// Parse a key combination string into a [`KeyCombo`].
///
/// Format: "Modifier+Modifier+Key"
///
/// Modifiers: `Ctrl`/`Control`, `Alt`/`Option`, `Shift`,
/// `Super`/`Cmd`/`Command`/`Meta`/`Win`, `CmdOrCtrl`.
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    let parts: Vec<&str> = s.split('+').map(str::trim).collect();
    if parts.iter().all(|p| p.is_empty()) {
        return Err(ParseError("Empty key combination".to_string()));
    }

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        let flag = match part.to_lowercase().as_str() {
            "ctrl" | "control" => Some(&mut modifiers.ctrl),
            "alt" | "option" => Some(&mut modifiers.alt),
            "shift" => Some(&mut modifiers.shift),
            "super" | "cmd" | "command" | "meta" | "win" => Some(&mut modifiers.super_key),
            "cmdorctrl" => Some(&mut modifiers.cmd_or_ctrl),
            _ => None,
        };

        match flag {
            Some(flag) => {
                if is_last {
                    return Err(ParseError(
                        "Key combination ends with modifier, no key specified".to_string(),
                    ));
                }
                *flag = true;
            }
            None => {
                if key_part.is_some() {
                    return Err(ParseError(format!(
                        "Multiple keys specified: already have key, found '{}'",
                        part
                    )));
                }
                key_part = Some(*part);
            }
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;
    let key = parse_key(key_str)?;

    Ok(KeyCombo { modifiers, key })
}

fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    if let Some(code_str) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return parse_physical_key_code(code_str)
            .map(ParsedKey::Physical)
            .ok_or_else(|| ParseError(format!("Unknown physical key code: '{}'", code_str)));
    }

    if let Some(named) = parse_named_key(s) {
        return Ok(ParsedKey::Named(named));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(ParsedKey::Character(c.to_ascii_uppercase())),
        _ => Err(ParseError(format!("Unknown key: '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let combo = parse_key_combo("W").unwrap();
        assert_eq!(combo.key, ParsedKey::Character('W'));
        assert_eq!(combo.modifiers, Modifiers::default());
    }

    #[test]
    fn test_parse_cmd_or_ctrl_alt() {
        let combo = parse_key_combo("CmdOrCtrl+Alt+w").unwrap();
        assert!(combo.modifiers.cmd_or_ctrl);
        assert!(combo.modifiers.alt);
        assert!(!combo.modifiers.ctrl);
        assert_eq!(combo.key, ParsedKey::Character('W'));
    }

    #[test]
    fn test_parse_named_arrow() {
        let combo = parse_key_combo("Ctrl+Alt+Right").unwrap();
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::ArrowRight));
    }

    #[test]
    fn test_parse_physical() {
        let combo = parse_key_combo("Ctrl+[KeyW]").unwrap();
        assert_eq!(combo.key, ParsedKey::Physical(KeyCode::KeyW));
        assert!(parse_key_combo("Ctrl+[KeyNope]").is_err());
    }

    #[test]
    fn test_errors() {
        assert!(parse_key_combo("").is_err());
        assert!(parse_key_combo("Ctrl+Shift").is_err());
        assert!(parse_key_combo("Ctrl+A+B").is_err());
        assert!(parse_key_combo("Ctrl+Banana").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let combo = parse_key_combo("CmdOrCtrl+Shift+T").unwrap();
        assert_eq!(combo.to_string(), "CmdOrCtrl+Shift+T");
        assert_eq!(parse_key_combo(&combo.to_string()).unwrap(), combo);
    }
}
