//! Keybinding management methods for `Config`.

use super::config_struct::Config;

impl Config {
    /// Merge default keybindings for any action the user has not configured.
    pub(crate) fn merge_default_keybindings(&mut self) {
        let existing_actions: std::collections::HashSet<String> = self
            .keybindings
            .iter()
            .map(|kb| kb.action.clone())
            .collect();

        let mut added_count = 0;
        for default_kb in crate::defaults::keybindings() {
            if !existing_actions.contains(&default_kb.action) {
                log::info!(
                    "Adding default keybinding: {} -> {}",
                    default_kb.key,
                    default_kb.action
                );
                self.keybindings.push(default_kb);
                added_count += 1;
            }
        }

        if added_count > 0 {
            log::info!(
                "Merged {} default keybinding(s) into user config",
                added_count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, KeyBinding};

    #[test]
    fn merge_keeps_user_binding_for_configured_action() {
        let mut config = Config {
            keybindings: vec![KeyBinding::new("Ctrl+Shift+X", "close_tab")],
            ..Config::default()
        };
        config.merge_default_keybindings();

        let close: Vec<_> = config
            .keybindings
            .iter()
            .filter(|kb| kb.action == "close_tab")
            .collect();
        assert_eq!(close.len(), 1);
        assert_eq!(close[0].key, "Ctrl+Shift+X");
        assert!(config.keybindings.iter().any(|kb| kb.action == "next_tab"));
        assert!(config.keybindings.iter().any(|kb| kb.action == "prev_tab"));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut config = Config::default();
        let before = config.keybindings.len();
        config.merge_default_keybindings();
        assert_eq!(config.keybindings.len(), before);
    }
}
