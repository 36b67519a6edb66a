//! Shared state for every command: configuration, catalog, and history.

use crate::builtin;
use folio_core::catalog::load_catalog;
use folio_core::config::Config;
use folio_core::{Error, Result, ResultExt};
use folio_search::{Catalog, FileBackend, RecentQueryStore};
use folio_telemetry::TelemetryConfig;
use std::path::{Path, PathBuf};

/// Everything a command needs, resolved once at startup.
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    history_path: Option<PathBuf>,
}

impl AppContext {
    /// Load config, start logging, and resolve the catalog and history file.
    ///
    /// Command-line paths win over configuration. `json_logs` switches log
    /// lines to JSON even when `[logging] json` is off.
    pub fn load(
        config_path: Option<&Path>,
        catalog_override: Option<PathBuf>,
        history_override: Option<PathBuf>,
        verbose: bool,
        json_logs: bool,
    ) -> Result<Self> {
        let config = Config::load(config_path)?;

        let logging = &config.schema.logging;
        let level = if verbose { "debug" } else { logging.level.as_str() };
        let telemetry = TelemetryConfig {
            show_target: logging.show_target,
            show_file: logging.show_file,
            show_line_number: logging.show_line_number,
            json: logging.json || json_logs,
            ..TelemetryConfig::with_level(level)
        };
        if let Err(e) = folio_telemetry::init_with_config(telemetry) {
            eprintln!("Logging disabled: {}", e);
        }

        let catalog = match catalog_override.or_else(|| config.schema.search.catalog.clone()) {
            Some(path) => load_catalog(&path)?,
            None => builtin::portfolio().context("While loading the built-in catalog")?,
        };

        let history_path = history_override.or_else(|| config.schema.history.resolved_path());

        tracing::debug!(
            items = catalog.len(),
            history = ?history_path,
            "Context ready"
        );

        Ok(Self {
            config,
            catalog,
            history_path,
        })
    }

    /// Results to show when no explicit limit is given
    pub fn default_limit(&self) -> usize {
        self.config.schema.search.limit
    }

    /// Whether searches should be remembered
    pub fn history_enabled(&self) -> bool {
        self.config.schema.history.enabled && self.history_path.is_some()
    }

    /// The recent-query store, if a history location is known
    pub fn history(&self) -> Result<RecentQueryStore<FileBackend>> {
        let path = self.history_path.as_ref().ok_or_else(|| {
            Error::history("No location for recent-query history on this platform")
                .with_suggestion("Set history.path in .folio.toml or pass --history")
        })?;

        Ok(RecentQueryStore::with_capacity(
            FileBackend::new(path),
            self.config.schema.history.capacity,
        ))
    }
}
