//! Spotlight search for the Folio portfolio site.
//!
//! This crate provides:
//! - Layered relevance scoring (exact, prefix, substring, per-term, fuzzy)
//! - Character-subsequence fuzzy matching
//! - An immutable, injected catalog of searchable items
//! - A bounded recent-query history with pluggable storage
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use folio_search::{Catalog, SearchableItem, Target};
//!
//! let catalog = Catalog::new(vec![
//!     SearchableItem::new("resume", "Resume", Target::navigate("/resume")).with_keywords(["cv"]),
//!     SearchableItem::new("theme", "Toggle Theme", Target::action("toggle-theme")),
//! ])
//! .unwrap();
//!
//! let results = catalog.rank("cv");
//! assert_eq!(results[0].item.id, "resume");
//!
//! // A blank query browses the whole catalog in order.
//! assert_eq!(catalog.rank("").len(), 2);
//! ```

mod catalog;
mod error;
pub mod fuzzy;
pub mod history;
mod item;
mod query;
mod ranker;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::Catalog;
pub use error::{Result, SearchError};
pub use history::{FileBackend, HistoryBackend, MemoryBackend, RecentQueries, RecentQueryStore};
pub use item::{SearchableItem, Target};
pub use query::Query;
pub use ranker::{explain, rank, rank_top};
pub use relevance::{score_breakdown, score_item, ScoreBreakdown, Signal};

/// An item paired with its relevance score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankedResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}
