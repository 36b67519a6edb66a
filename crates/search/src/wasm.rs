//! WASM bindings for the spotlight search.
//!
//! Everything crosses the boundary as JSON strings. History persistence is
//! the host's: it passes the stored string in and saves the string it gets
//! back (typically in `localStorage`).

use crate::history::{RecentQueries, MAX_RECENT_QUERIES};
use crate::{Catalog, SearchableItem};
use wasm_bindgen::prelude::*;

/// Rank a catalog and return results as JSON.
///
/// # Arguments
/// * `query` - Raw search query (blank browses the whole catalog)
/// * `catalog_json` - JSON array of items
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of `{item, score}` objects, best first. `[]` if the catalog
/// cannot be parsed.
#[wasm_bindgen]
pub fn rank_json(query: &str, catalog_json: &str, max_results: usize) -> String {
    let catalog = match Catalog::from_json(catalog_json) {
        Ok(catalog) => catalog,
        Err(_) => return "[]".to_string(),
    };

    let results = catalog.rank_top(query, max_results);
    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}

/// Per-signal score breakdown for one item as JSON.
///
/// Returns `null` for a blank query or an unparseable item.
#[wasm_bindgen]
pub fn explain_json(query: &str, item_json: &str) -> String {
    let Ok(item) = serde_json::from_str::<SearchableItem>(item_json) else {
        return "null".to_string();
    };

    crate::explain(query, &item)
        .and_then(|breakdown| serde_json::to_string(&breakdown).ok())
        .unwrap_or_else(|| "null".to_string())
}

/// Record a query into stored history and return the updated value to store.
#[wasm_bindgen]
pub fn record_recent(stored: &str, query: &str) -> String {
    let mut recent = RecentQueries::from_json(stored, MAX_RECENT_QUERIES);
    recent.record(query);
    recent.to_json()
}

/// Normalize stored history, returning `[]` for anything malformed.
#[wasm_bindgen]
pub fn load_recent(stored: &str) -> String {
    RecentQueries::from_json(stored, MAX_RECENT_QUERIES).to_json()
}
