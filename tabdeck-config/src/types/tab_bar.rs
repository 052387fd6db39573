//! Tab strip placement types.

use serde::{Deserialize, Serialize};

/// Where the tab strip is rendered relative to the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TabPosition {
    /// Own row below the header (default)
    #[default]
    Separate,
    /// Inside the header row
    Inline,
}

impl TabPosition {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TabPosition::Separate => "Separate",
            TabPosition::Inline => "Inline",
        }
    }

    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            TabPosition::Separate => "separate",
            TabPosition::Inline => "inline",
        }
    }

    /// All available positions for UI iteration
    pub fn all() -> &'static [TabPosition] {
        &[TabPosition::Separate, TabPosition::Inline]
    }

    /// Parse the stored string form. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "separate" => Some(TabPosition::Separate),
            "inline" => Some(TabPosition::Inline),
            _ => None,
        }
    }
}

impl std::fmt::Display for TabPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_stored_forms() {
        assert_eq!(TabPosition::parse("separate"), Some(TabPosition::Separate));
        assert_eq!(TabPosition::parse(" Inline "), Some(TabPosition::Inline));
        assert_eq!(TabPosition::parse("sidebar"), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&TabPosition::Inline).unwrap();
        assert_eq!(json, "\"inline\"");
        let parsed: TabPosition = serde_json::from_str("\"separate\"").unwrap();
        assert_eq!(parsed, TabPosition::Separate);
    }
}
