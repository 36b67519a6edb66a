//! Ranking a catalog against a query.

use crate::item::SearchableItem;
use crate::query::Query;
use crate::relevance::{score_breakdown, score_item, ScoreBreakdown};
use crate::RankedResult;

/// Rank `items` against a raw query.
///
/// A blank query is the browse state: every item comes back in its original
/// order with a score of 0. Otherwise only items scoring above 0 are
/// returned, best first, with ties left in catalog order.
///
/// # Example
/// ```
/// use folio_search::{rank, SearchableItem, Target};
///
/// let items = vec![
///     SearchableItem::new("resume-gen", "Resume Generator", Target::navigate("/projects/resume-gen")),
///     SearchableItem::new("resume", "Resume", Target::navigate("/resume")),
///     SearchableItem::new("contact", "Contact", Target::navigate("/contact")),
/// ];
///
/// let results = rank("resume", &items);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].item.id, "resume");
/// assert_eq!(results[1].item.id, "resume-gen");
/// ```
pub fn rank<'a>(query: &str, items: &'a [SearchableItem]) -> Vec<RankedResult<&'a SearchableItem>> {
    let Some(query) = Query::parse(query) else {
        return items
            .iter()
            .map(|item| RankedResult { item, score: 0 })
            .collect();
    };

    let mut results = score_all(&query, items);

    // sort_by is stable, which keeps equal scores in catalog order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query = %query.as_str(),
        terms = query.terms().len(),
        candidates = items.len(),
        hits = results.len(),
        "Ranked catalog"
    );

    results
}

/// Rank and keep at most `max_results` results (0 keeps all).
pub fn rank_top<'a>(
    query: &str,
    items: &'a [SearchableItem],
    max_results: usize,
) -> Vec<RankedResult<&'a SearchableItem>> {
    let mut results = rank(query, items);
    if max_results > 0 {
        results.truncate(max_results);
    }
    results
}

/// Per-signal breakdown of how `item` scores for a raw query.
///
/// Returns `None` for a blank query, which is never scored.
pub fn explain(query: &str, item: &SearchableItem) -> Option<ScoreBreakdown> {
    Query::parse(query).map(|query| score_breakdown(item, &query))
}

fn score_all<'a>(query: &Query, items: &'a [SearchableItem]) -> Vec<RankedResult<&'a SearchableItem>> {
    // Collecting keeps input order on both paths, so the stable sort above
    // sees items in catalog order.
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| RankedResult { item, score: score_item(item, query) })
            .filter(|result| result.score > 0)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| RankedResult { item, score: score_item(item, query) })
            .filter(|result| result.score > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Target;
    use proptest::prelude::*;

    fn item(id: &str, title: &str) -> SearchableItem {
        SearchableItem::new(id, title, Target::navigate(format!("/{id}")))
    }

    fn portfolio() -> Vec<SearchableItem> {
        vec![
            item("home", "Home").with_category("Navigation"),
            item("about", "About Me")
                .with_description("Background, values, and how I work")
                .with_category("Navigation"),
            item("skills", "Skills")
                .with_description("Languages and tools I use")
                .with_category("Navigation")
                .with_keywords(["rust", "typescript", "react"]),
            item("resume", "Resume")
                .with_description("Work experience and education")
                .with_category("Navigation")
                .with_keywords(["cv"]),
            SearchableItem::new("theme", "Toggle Theme", Target::action("toggle-theme"))
                .with_description("Switch between light and dark mode")
                .with_category("Actions")
                .with_keywords(["dark", "light"]),
        ]
    }

    #[test]
    fn test_empty_query_browses_in_order() {
        let items = portfolio();
        for query in ["", "   ", "\t\n"] {
            let results = rank(query, &items);
            let ids: Vec<_> = results.iter().map(|r| r.item.id.as_str()).collect();
            assert_eq!(ids, vec!["home", "about", "skills", "resume", "theme"]);
            assert!(results.iter().all(|r| r.score == 0));
        }
    }

    #[test]
    fn test_resume_scenario() {
        let items = vec![
            item("resume", "Resume"),
            item("resume-gen", "Resume Generator"),
            item("contact", "Contact"),
        ];
        let results = rank("resume", &items);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item.id, "resume");
        assert_eq!(results[1].item.id, "resume-gen");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_fuzzy_scenario() {
        let items = vec![item("resume", "Resume")];
        assert_eq!(rank("rsm", &items).len(), 1);
        assert!(rank("xyz", &items).is_empty());
    }

    #[test]
    fn test_exact_beats_substring() {
        let items = vec![item("tools", "My Rust Tools"), item("rust", "Rust")];
        let results = rank("rust", &items);
        assert_eq!(results[0].item.id, "rust");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_keyword_recall() {
        let items = portfolio();
        let results = rank("cv", &items);
        assert_eq!(results[0].item.id, "resume");
    }

    #[test]
    fn test_action_found_by_keyword() {
        let items = portfolio();
        let results = rank("dark", &items);
        assert_eq!(results[0].item.id, "theme");
        assert!(results[0].item.target.is_action());
        assert_eq!(results[0].item.target.value(), "toggle-theme");
    }

    #[test]
    fn test_query_case_and_padding_ignored() {
        let items = portfolio();
        assert_eq!(rank("  RESUME ", &items), rank("resume", &items));
    }

    #[test]
    fn test_no_match_excluded() {
        let items = portfolio();
        let results = rank("kubernetes", &items);
        assert!(results.is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let items = vec![item("b", "Alpha"), item("a", "Alpha"), item("c", "Alphabet")];
        let results = rank("alpha", &items);
        let ids: Vec<_> = results.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_top_limits() {
        let items = vec![item("a", "Alpha"), item("b", "Alpha"), item("c", "Alpha")];
        assert_eq!(rank_top("alpha", &items, 2).len(), 2);
        assert_eq!(rank_top("alpha", &items, 0).len(), 3);
    }

    #[test]
    fn test_explain_matches_rank() {
        let items = portfolio();
        for result in rank("about", &items) {
            let breakdown = explain("about", result.item).unwrap();
            assert_eq!(breakdown.total(), result.score);
        }
        assert!(explain("  ", &items[0]).is_none());
    }

    proptest! {
        #[test]
        fn prop_rank_is_total(query in any::<String>(), title in any::<String>(), desc in any::<String>()) {
            let items = vec![item("x", &title).with_description(desc)];
            let _ = rank(&query, &items);
        }

        #[test]
        fn prop_results_sorted_and_positive(query in "[a-z ]{0,12}") {
            let items = portfolio();
            let results = rank(&query, &items);
            if query.trim().is_empty() {
                prop_assert_eq!(results.len(), items.len());
            } else {
                prop_assert!(results.iter().all(|r| r.score > 0));
                prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
            }
        }

        #[test]
        fn prop_keyword_equal_to_query_never_lowers_score(query in "[a-z]{1,8}( [a-z]{1,6})?") {
            let base = item("x", "Portfolio").with_description("Selected work").with_keywords(["web"]);
            let boosted = base.clone().with_keywords(["web".to_string(), query.clone()]);
            let parsed = Query::parse(&query).unwrap();
            prop_assert!(score_item(&boosted, &parsed) > score_item(&base, &parsed));
        }

        #[test]
        fn prop_equal_scores_keep_catalog_order(titles in proptest::collection::vec("[ab]{1,3}", 1..8)) {
            let items: Vec<_> = titles
                .iter()
                .enumerate()
                .map(|(i, title)| item(&i.to_string(), title))
                .collect();
            let results = rank("a", &items);
            for pair in results.windows(2) {
                if pair[0].score == pair[1].score {
                    let first: usize = pair[0].item.id.parse().unwrap();
                    let second: usize = pair[1].item.id.parse().unwrap();
                    prop_assert!(first < second);
                }
            }
        }
    }
}
