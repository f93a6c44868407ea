//! Display configuration for the terminal driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "timetravel.toml";

/// How the board is drawn and what gets logged.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the cell index on empty squares.
    #[serde(default = "default_show_indices")]
    show_indices: bool,

    /// Wrap winning cells in brackets.
    #[serde(default = "default_highlight_winner")]
    highlight_winner: bool,

    /// Tracing filter used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_show_indices() -> bool {
    true
}

fn default_highlight_winner() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_indices: default_show_indices(),
            highlight_winner: default_highlight_winner(),
            log_filter: default_log_filter(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must load. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if it exists, and defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_indices = false").unwrap();

        let config = DisplayConfig::from_file(file.path()).unwrap();
        assert!(!config.show_indices());
        assert!(*config.highlight_winner());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_indices = true").unwrap();
        writeln!(file, "highlight_winner = false").unwrap();
        writeln!(file, "log_filter = \"strictly_timetravel=debug\"").unwrap();

        let config = DisplayConfig::from_file(file.path()).unwrap();
        assert!(*config.show_indices());
        assert!(!config.highlight_winner());
        assert_eq!(config.log_filter(), "strictly_timetravel=debug");
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = DisplayConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert!(*config.show_indices());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = DisplayConfig::load(Some(&missing)).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_indices = \"maybe\"").unwrap();

        let err = DisplayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
