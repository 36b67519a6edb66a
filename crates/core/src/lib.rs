//! Core utilities for the Folio spotlight tools
//!
//! This crate provides shared functionality used by the CLI:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Catalog files**: Loading JSON or TOML catalogs from disk
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_core::{catalog::load_catalog, config::Config};
//! use std::path::Path;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! let catalog = load_catalog(Path::new("catalog.json")).expect("Invalid catalog");
//!
//! for result in catalog.rank_top("rust", config.schema.search.limit) {
//!     println!("{} ({})", result.item.title, result.score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{load_catalog, CatalogFormat};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
