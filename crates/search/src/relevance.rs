//! Relevance scoring for catalog items.
//!
//! Every signal is additive and none ever subtracts, so a field that starts
//! matching can only raise an item's score. The title is checked twice for
//! prefix and inclusion: once by the discrete signals and once by the fuzzy
//! scan bonuses. Rankings depend on that overlap, so it stays.

use crate::fuzzy::fuzzy_score;
use crate::item::SearchableItem;
use crate::query::Query;
use serde::Serialize;

/// Discrete scoring signals and their weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Normalized title equals the query
    ExactTitle = 100,
    /// Title starts with the query
    TitlePrefix = 50,
    /// Title contains the query
    TitleContains = 30,
    /// Description contains the query
    DescriptionContains = 20,
    /// Category contains the query
    CategoryContains = 15,
    /// A keyword contains the query, per keyword
    KeywordContains = 10,
    /// Title contains a term
    TermInTitle = 6,
    /// Description contains a term
    TermInDescription = 3,
    /// A keyword contains a term, per keyword
    TermInKeyword = 2,
}

impl Signal {
    /// Points this signal contributes once.
    pub const fn weight(self) -> u32 {
        self as u32
    }

    fn times(self, count: usize) -> u32 {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.weight().saturating_mul(count)
    }

    fn when(self, hit: bool) -> u32 {
        if hit { self.weight() } else { 0 }
    }
}

/// Divisor applied to the description's fuzzy score.
pub const DESCRIPTION_FUZZY_DIVISOR: u32 = 3;

/// Ceiling on the description's fuzzy contribution.
pub const DESCRIPTION_FUZZY_CAP: u32 = 10;

/// Per-signal contributions for one item and one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub exact_title: u32,
    pub title_prefix: u32,
    pub title_contains: u32,
    pub description_contains: u32,
    pub category_contains: u32,
    pub keyword_contains: u32,
    pub term_in_title: u32,
    pub term_in_description: u32,
    pub term_in_keyword: u32,
    /// Subsequence scan plus prefix and inclusion bonuses against the title
    pub title_fuzzy: u32,
    /// Capped fuzzy contribution from the description
    pub description_fuzzy: u32,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> u32 {
        [
            self.exact_title,
            self.title_prefix,
            self.title_contains,
            self.description_contains,
            self.category_contains,
            self.keyword_contains,
            self.term_in_title,
            self.term_in_description,
            self.term_in_keyword,
            self.title_fuzzy,
            self.description_fuzzy,
        ]
        .into_iter()
        .fold(0u32, u32::saturating_add)
    }

    /// Non-zero contributions as `(name, points)` pairs, in scoring order.
    pub fn contributions(&self) -> Vec<(&'static str, u32)> {
        [
            ("exact_title", self.exact_title),
            ("title_prefix", self.title_prefix),
            ("title_contains", self.title_contains),
            ("description_contains", self.description_contains),
            ("category_contains", self.category_contains),
            ("keyword_contains", self.keyword_contains),
            ("term_in_title", self.term_in_title),
            ("term_in_description", self.term_in_description),
            ("term_in_keyword", self.term_in_keyword),
            ("title_fuzzy", self.title_fuzzy),
            ("description_fuzzy", self.description_fuzzy),
        ]
        .into_iter()
        .filter(|(_, points)| *points > 0)
        .collect()
    }
}

/// Compute every signal for `item` against `query`.
pub fn score_breakdown(item: &SearchableItem, query: &Query) -> ScoreBreakdown {
    let q = query.as_str();
    let title = item.title.to_lowercase();
    let description = item.description.to_lowercase();
    let category = item.category.to_lowercase();
    let keywords: Vec<String> = item.keywords.iter().map(|k| k.to_lowercase()).collect();

    let keywords_containing =
        |needle: &str| keywords.iter().filter(|k| k.contains(needle)).count();

    let mut breakdown = ScoreBreakdown {
        exact_title: Signal::ExactTitle.when(title.trim() == q),
        title_prefix: Signal::TitlePrefix.when(title.starts_with(q)),
        title_contains: Signal::TitleContains.when(title.contains(q)),
        description_contains: Signal::DescriptionContains.when(description.contains(q)),
        category_contains: Signal::CategoryContains.when(category.contains(q)),
        keyword_contains: Signal::KeywordContains.times(keywords_containing(q)),
        title_fuzzy: fuzzy_score(&title, q),
        description_fuzzy: (fuzzy_score(&description, q) / DESCRIPTION_FUZZY_DIVISOR)
            .min(DESCRIPTION_FUZZY_CAP),
        ..ScoreBreakdown::default()
    };

    for term in query.terms() {
        let term = term.as_str();
        breakdown.term_in_title = breakdown
            .term_in_title
            .saturating_add(Signal::TermInTitle.when(title.contains(term)));
        breakdown.term_in_description = breakdown
            .term_in_description
            .saturating_add(Signal::TermInDescription.when(description.contains(term)));
        breakdown.term_in_keyword = breakdown
            .term_in_keyword
            .saturating_add(Signal::TermInKeyword.times(keywords_containing(term)));
    }

    breakdown
}

/// Relevance score of `item` for `query` (higher is better, 0 is no match).
pub fn score_item(item: &SearchableItem, query: &Query) -> u32 {
    score_breakdown(item, query).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Target;

    fn item(title: &str) -> SearchableItem {
        SearchableItem::new(title.to_lowercase(), title, Target::navigate("/"))
    }

    fn query(raw: &str) -> Query {
        Query::parse(raw).unwrap()
    }

    #[test]
    fn test_signal_weights() {
        assert_eq!(Signal::ExactTitle.weight(), 100);
        assert_eq!(Signal::TermInKeyword.weight(), 2);
    }

    #[test]
    fn test_exact_title_breakdown() {
        let breakdown = score_breakdown(&item("Resume"), &query("resume"));

        assert_eq!(breakdown.exact_title, 100);
        assert_eq!(breakdown.title_prefix, 50);
        assert_eq!(breakdown.title_contains, 30);
        assert_eq!(breakdown.term_in_title, 6);
        // r,e,s,u,m,e contiguous: 3 + 5*5 = 28, +10 prefix, +5 inclusion
        assert_eq!(breakdown.title_fuzzy, 43);
        assert_eq!(breakdown.total(), 229);
    }

    #[test]
    fn test_prefix_title_breakdown() {
        let breakdown = score_breakdown(&item("Resume Generator"), &query("resume"));

        assert_eq!(breakdown.exact_title, 0);
        assert_eq!(breakdown.total(), 50 + 30 + 6 + 43);
    }

    #[test]
    fn test_keywords_count_each_match() {
        let item = item("Projects").with_keywords(["rust cli", "rust wasm", "react"]);
        let breakdown = score_breakdown(&item, &query("rust"));

        assert_eq!(breakdown.keyword_contains, 20);
        assert_eq!(breakdown.term_in_keyword, 4);
    }

    #[test]
    fn test_terms_scored_independently() {
        let item = item("Rust Projects").with_description("Systems tools written in Rust");
        let breakdown = score_breakdown(&item, &query("rust tools"));

        // "rust" in title, "tools" not
        assert_eq!(breakdown.term_in_title, 6);
        // both terms in description
        assert_eq!(breakdown.term_in_description, 6);
        assert_eq!(breakdown.title_contains, 0);
    }

    #[test]
    fn test_description_fuzzy_is_capped() {
        let item = item("Contact")
            .with_description("Send a message about collaboration on open source work");
        let breakdown = score_breakdown(&item, &query("collaboration"));

        assert_eq!(breakdown.description_contains, 20);
        assert_eq!(breakdown.description_fuzzy, DESCRIPTION_FUZZY_CAP);
    }

    #[test]
    fn test_description_fuzzy_floors() {
        // "ab" against "a-b": 3 + 3 = 6, /3 = 2
        let item = item("Zzz").with_description("a-b");
        let breakdown = score_breakdown(&item, &query("ab"));

        assert_eq!(breakdown.description_fuzzy, 2);
        assert_eq!(breakdown.total(), 2);
    }

    #[test]
    fn test_category_match() {
        let item = item("Website").with_category("Projects");
        assert_eq!(score_breakdown(&item, &query("project")).category_contains, 15);
    }

    #[test]
    fn test_fuzzy_only_match() {
        assert_eq!(score_item(&item("Resume"), &query("rsm")), 9);
        assert_eq!(score_item(&item("Resume"), &query("xyz")), 0);
    }

    #[test]
    fn test_contributions_skip_zero() {
        let breakdown = score_breakdown(&item("Resume"), &query("rsm"));
        assert_eq!(breakdown.contributions(), vec![("title_fuzzy", 9)]);
    }
}
