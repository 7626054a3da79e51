//! Settings for the eventform toolkit.
//!
//! Provides the [`Settings`] struct with sensible defaults and optional
//! loading from a TOML file. There is deliberately little to configure:
//! the form itself has a fixed field set, so settings only cover the
//! ambient concerns (debug mode and log level).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EventFormError, EventFormResult};

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs, verbose output).
    pub debug: bool,
    /// The log level filter (e.g. "debug", "info", "warn", "error").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EventFormError::ConfigurationError`] if the file cannot
    /// be read or does not parse as valid settings.
    pub fn from_toml_file(path: impl AsRef<Path>) -> EventFormResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EventFormError::ConfigurationError(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            EventFormError::ConfigurationError(format!("cannot parse {}: {e}", path.display()))
        })
    }
}
