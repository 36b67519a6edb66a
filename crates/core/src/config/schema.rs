//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// `[search]`
    #[serde(default)]
    pub search: SearchConfig,

    /// `[history]`
    #[serde(default)]
    pub history: HistoryConfig,

    /// `[logging]`
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Reject values the tools cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.search.limit == 0 {
            return Err(Error::config_validation("search.limit must be at least 1")
                .with_suggestion("Remove search.limit to use the default of 8"));
        }
        if self.history.capacity == 0 {
            return Err(Error::config_validation("history.capacity must be at least 1")
                .with_suggestion("Set history.enabled = false to turn history off"));
        }
        Ok(())
    }
}

/// Search behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Maximum results shown per query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Catalog file (JSON or TOML); the built-in catalog when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            catalog: None,
        }
    }
}

fn default_limit() -> usize {
    8
}

/// Recent-query history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Record queries at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// History file; the platform data directory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Entries kept
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            capacity: default_capacity(),
        }
    }
}

impl HistoryConfig {
    /// Configured path, or the default location if one exists on this platform
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(default_history_path)
    }
}

fn default_capacity() -> usize {
    folio_search::history::MAX_RECENT_QUERIES
}

fn default_true() -> bool {
    true
}

/// `<data dir>/folio/recent-queries.json`
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("folio").join("recent-queries.json"))
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Include the module target in log lines
    #[serde(default)]
    pub show_target: bool,

    /// Include the source file in log lines
    #[serde(default)]
    pub show_file: bool,

    /// Include the source line in log lines
    #[serde(default)]
    pub show_line_number: bool,

    /// Write log lines as JSON objects
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            show_target: false,
            show_file: false,
            show_line_number: false,
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
