//! Configuration loading and schema definitions
//!
//! Read from `.folio.toml`, `folio.toml`, or `.config/folio.toml`, or from an
//! explicit path. Every section is optional.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
