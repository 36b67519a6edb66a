//! Error types for the search crate.
//!
//! Ranking itself never fails; these cover catalog loading and history
//! persistence.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while loading a catalog or persisting history.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog entry is unusable
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two catalog entries share an id
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// Catalog JSON could not be parsed
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog TOML could not be parsed
    #[error("Catalog TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// History could not be written
    #[error("History storage error: {0}")]
    Storage(#[from] std::io::Error),
}
