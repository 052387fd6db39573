//! Typed error variants for the tabdeck-config crate.
//!
//! Config loading and store writes surface these so library consumers can
//! match on failure modes instead of opaque `anyhow` strings. Callers that
//! work in `anyhow` get them coerced automatically.

use thiserror::Error;

/// Errors that can occur when loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Errors produced when writing to a persistent key-value store.
///
/// Reads never fail: missing or malformed entries degrade to defaults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("Store write failed for {path:?}: {source}")]
    Io {
        /// Path of the store file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("Store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_displayed() {
        let err = ConfigError::Validation("routes[0].pattern must start with '/'".to_string());
        assert_eq!(
            err.to_string(),
            "Config validation error: routes[0].pattern must start with '/'"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        let err = StoreError::Io {
            path: "/tmp/x.json".into(),
            source: std::io::Error::other("disk full"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("disk full"));
    }
}
