//! Searchable catalog records.

use serde::{Deserialize, Serialize};

/// What the consuming UI does when a result is selected.
///
/// Serialized externally tagged, e.g. `{"navigate": "/about"}` or
/// `{"action": "toggle-theme"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Route path or in-page anchor
    Navigate(String),
    /// Tagged action identifier the host dispatches
    Action(String),
}

impl Target {
    /// Navigation target.
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate(path.into())
    }

    /// Action target.
    pub fn action(id: impl Into<String>) -> Self {
        Self::Action(id.into())
    }

    /// Returns true for action targets.
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    /// The route or action identifier.
    pub fn value(&self) -> &str {
        match self {
            Self::Navigate(value) | Self::Action(value) => value,
        }
    }
}

/// An immutable catalog record.
///
/// Text fields missing from catalog data deserialize as empty and never
/// match anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Unique, stable identifier
    pub id: String,
    /// Primary match target
    #[serde(default)]
    pub title: String,
    /// Secondary match target
    #[serde(default)]
    pub description: String,
    /// Grouping label such as "Navigation" or "Projects"
    #[serde(default)]
    pub category: String,
    /// Aliases for terms absent from title and description
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Dispatched by the host when selected
    pub target: Target,
}

impl SearchableItem {
    /// Creates an item with empty description, category, and keywords.
    pub fn new(id: impl Into<String>, title: impl Into<String>, target: Target) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            keywords: Vec::new(),
            target,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}
