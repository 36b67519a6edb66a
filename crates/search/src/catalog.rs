//! The static, insertion-ordered set of searchable items.

use crate::error::{Result, SearchError};
use crate::item::SearchableItem;
use crate::ranker::{rank, rank_top};
use crate::RankedResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An immutable catalog.
///
/// Built once and passed by reference to the ranker; there is no way to
/// add or remove items after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<SearchableItem>,
}

/// Accepted on-disk shapes: a bare array or a table of `items`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<SearchableItem>),
    Table { items: Vec<SearchableItem> },
}

impl CatalogFile {
    fn into_items(self) -> Vec<SearchableItem> {
        match self {
            Self::List(items) | Self::Table { items } => items,
        }
    }
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Fails if an id is blank or appears twice.
    pub fn new(items: Vec<SearchableItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(SearchError::InvalidCatalog(format!(
                    "item titled {:?} has an empty id",
                    item.title
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(SearchError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Parse a JSON array of items, or an object with an `items` array.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.into_items())
    }

    /// Parse TOML with one `[[items]]` table per item.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct TomlCatalog {
            #[serde(default)]
            items: Vec<SearchableItem>,
        }

        let file: TomlCatalog = toml::from_str(toml_str)?;
        Self::new(file.items)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&SearchableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .collect()
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchableItem> {
        self.items.iter()
    }

    /// Rank this catalog against `query`. See [`rank`].
    pub fn rank(&self, query: &str) -> Vec<RankedResult<&SearchableItem>> {
        rank(query, &self.items)
    }

    /// Rank and keep at most `limit` results (0 keeps all). See [`rank_top`].
    pub fn rank_top(&self, query: &str, limit: usize) -> Vec<RankedResult<&SearchableItem>> {
        rank_top(query, &self.items, limit)
    }
}

impl AsRef<[SearchableItem]> for Catalog {
    fn as_ref(&self) -> &[SearchableItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SearchableItem;
    type IntoIter = std::slice::Iter<'a, SearchableItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
