//! The catalog shipped with the binary.

use folio_search::Catalog;

const PORTFOLIO_JSON: &str = include_str!("../catalog/portfolio.json");

/// Parse the embedded portfolio catalog.
pub fn portfolio() -> folio_core::Result<Catalog> {
    Ok(Catalog::from_json(PORTFOLIO_JSON)?)
}
