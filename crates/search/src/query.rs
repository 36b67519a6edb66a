//! Query normalization.

/// A trimmed, lowercased, non-blank query and its whitespace-separated terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    terms: Vec<String>,
}

impl Query {
    /// Normalize a raw query.
    ///
    /// Returns `None` for empty or whitespace-only input; that is the
    /// browse state, not a query.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        let terms = text.split_whitespace().map(str::to_owned).collect();
        Some(Self { text, terms })
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated terms, never empty.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
