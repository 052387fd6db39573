//! Semantic validation for `Config`.

use super::config_struct::Config;
use crate::error::ConfigError;
use std::collections::HashSet;

impl Config {
    /// Check fields that serde cannot: route patterns must be absolute and
    /// unique, and the home path must be absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.home_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "home_path must start with '/', got '{}'",
                self.home_path
            )));
        }

        let mut seen = HashSet::new();
        for (i, route) in self.routes.iter().enumerate() {
            if !route.pattern.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "routes[{}].pattern must start with '/', got '{}'",
                    i, route.pattern
                )));
            }
            if !seen.insert(route.pattern.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "routes[{}].pattern '{}' is defined more than once",
                    i, route.pattern
                )));
            }
            if route.query_key.as_deref().is_some_and(str::is_empty) {
                return Err(ConfigError::Validation(format!(
                    "routes[{}].query_key must not be empty",
                    i
                )));
            }
        }
        Ok(())
    }
}
