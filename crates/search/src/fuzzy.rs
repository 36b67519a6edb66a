//! Character-subsequence matching.
//!
//! Both arguments are expected to be lowercased already. Text is walked as
//! Unicode scalar values, so combining marks and astral characters are just
//! more characters to compare.

/// Points for each query character found in order.
pub const MATCH_POINTS: u32 = 3;

/// Extra points when a matched character sits right after the previous match.
pub const ADJACENCY_POINTS: u32 = 2;

/// Bonus when the text starts with the whole query.
pub const PREFIX_BONUS: u32 = 10;

/// Bonus when the text contains the whole query.
pub const INCLUSION_BONUS: u32 = 5;

/// Score a greedy left-to-right subsequence scan of `query` over `text`.
///
/// Every query character matched in order earns [`MATCH_POINTS`]; a match
/// whose text position directly follows the previous match earns a further
/// [`ADJACENCY_POINTS`]. The first matched character has no predecessor and
/// never earns the adjacency bonus.
///
/// Returns 0 unless the whole query is found as a subsequence, and for an
/// empty query.
pub fn subsequence_score(text: &str, query: &str) -> u32 {
    let mut pending = query.chars().peekable();
    if pending.peek().is_none() {
        return 0;
    }

    let mut score: u32 = 0;
    let mut last_match: Option<usize> = None;

    for (position, c) in text.chars().enumerate() {
        let Some(&wanted) = pending.peek() else {
            break;
        };
        if c != wanted {
            continue;
        }

        score = score.saturating_add(MATCH_POINTS);
        if last_match.is_some_and(|last| last + 1 == position) {
            score = score.saturating_add(ADJACENCY_POINTS);
        }
        last_match = Some(position);
        pending.next();
    }

    if pending.peek().is_some() {
        return 0;
    }

    score
}

/// Full fuzzy score of `query` against `text`.
///
/// The subsequence score plus [`PREFIX_BONUS`] when `text` starts with
/// `query` and [`INCLUSION_BONUS`] when it contains it. A text that does not
/// hold the query as a subsequence scores 0.
pub fn fuzzy_score(text: &str, query: &str) -> u32 {
    let mut score = subsequence_score(text, query);
    if score == 0 {
        return 0;
    }

    if text.starts_with(query) {
        score = score.saturating_add(PREFIX_BONUS);
    }
    if text.contains(query) {
        score = score.saturating_add(INCLUSION_BONUS);
    }

    score
}
