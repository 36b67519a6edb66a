//! Terminal output utilities
//!
//! Provides consistent formatting for search results and status lines.

use folio_search::{RankedResult, SearchableItem, Target};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Mark the characters of `text` that a left-to-right scan of `query` hits.
///
/// Matching ignores case and whitespace in the query and walks characters
/// in order. Returns the text unchanged if the query is not a subsequence.
pub fn highlight(text: &str, query: &str) -> String {
    let wanted: Vec<char> = query
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if wanted.is_empty() {
        return text.to_string();
    }

    let mut next = 0;
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        let hit = next < wanted.len() && c.to_lowercase().eq(std::iter::once(wanted[next]));
        if hit {
            next += 1;
            out.push_str(&c.bold().yellow().to_string());
        } else {
            out.push(c);
        }
    }

    if next < wanted.len() {
        return text.to_string();
    }
    out
}

/// Shorten `text` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Short label for what selecting a result does
pub fn target_label(target: &Target) -> String {
    match target {
        Target::Navigate(path) => format!("→ {}", path),
        Target::Action(action) => format!("⚡ {}", action),
    }
}

/// Print one ranked result as a two-line entry.
///
/// A score of 0 (browse mode) is not shown.
pub fn print_result(position: usize, result: &RankedResult<&SearchableItem>, query: &str) {
    let item = result.item;
    let score = if result.score > 0 {
        format!("{:>4}", result.score).dimmed().to_string()
    } else {
        String::new()
    };

    println!(
        "{:>3}. {}  {}  {} {}",
        position,
        highlight(&item.title, query),
        format!("[{}]", item.category).cyan(),
        target_label(&item.target).dimmed(),
        score
    );
    if !item.description.is_empty() {
        println!("     {}", truncate(&item.description, 72).dimmed());
    }
}

/// Format a short latency for display
pub fn format_latency(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else {
        format!("{:.1}ms", duration.as_secs_f64() * 1000.0)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_highlight_keeps_text() {
        assert_eq!(strip_ansi(&highlight("Resume", "rsm")), "Resume");
    }

    #[test]
    fn test_highlight_marks_matches() {
        assert_ne!(highlight("Resume", "rsm"), "Resume");
    }

    #[test]
    fn test_highlight_no_match_unchanged() {
        assert_eq!(highlight("Resume", "xyz"), "Resume");
        assert_eq!(highlight("Resume", "   "), "Resume");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Work experience and education", 10), "Work expe…");
        assert_eq!(truncate("日本語テキスト", 4), "日本語…");
    }

    #[test]
    fn test_target_label() {
        assert_eq!(target_label(&Target::navigate("/resume")), "→ /resume");
        assert_eq!(target_label(&Target::action("toggle-theme")), "⚡ toggle-theme");
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(format_latency(Duration::from_micros(250)), "250µs");
        assert_eq!(format_latency(Duration::from_micros(2500)), "2.5ms");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "result", "results"), "1 result");
        assert_eq!(format_count(0, "result", "results"), "0 results");
    }
}
