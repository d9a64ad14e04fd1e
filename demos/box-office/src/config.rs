//! Configuration management for the box office.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Box office configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxOfficeConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full `EnvFilter` string)
    pub log_level: String,
    /// Colourise log output
    pub ansi: bool,
}

impl Default for BoxOfficeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}

impl BoxOfficeConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Missing or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_level: lookup("RUST_LOG")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
            ansi: lookup("BOX_OFFICE_ANSI")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.ansi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            BoxOfficeConfig::from_lookup(lookup(&[])),
            BoxOfficeConfig::default()
        );
    }

    #[test]
    fn test_overrides() {
        let config = BoxOfficeConfig::from_lookup(lookup(&[
            ("RUST_LOG", "box_office=debug"),
            ("BOX_OFFICE_ANSI", "false"),
        ]));

        assert_eq!(config.log_level, "box_office=debug");
        assert!(!config.ansi);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = BoxOfficeConfig::from_lookup(lookup(&[
            ("RUST_LOG", "  "),
            ("BOX_OFFICE_ANSI", "sometimes"),
        ]));

        assert_eq!(config, BoxOfficeConfig::default());
    }
}
