//! Search command - rank the catalog against a query

use crate::context::AppContext;
use anyhow::Result;
use folio_cli::output::{format_count, format_latency, print_result, Status};
use folio_core::Error;
use folio_search::{explain, rank_top};
use folio_telemetry::Timer;
use owo_colors::OwoColorize;

/// Run a search
pub fn run(
    ctx: &AppContext,
    query: &str,
    limit: Option<usize>,
    show_breakdown: bool,
    remember: bool,
    json: bool,
) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::invalid_input("Search query is empty")
            .with_suggestion("Run `folio-spotlight browse` to list every item")
            .into());
    }
    if limit == Some(0) {
        return Err(Error::invalid_input("--limit must be at least 1").into());
    }
    let limit = limit.unwrap_or_else(|| ctx.default_limit());

    let timer = Timer::start("search");
    let results = rank_top(query, ctx.catalog.items(), limit);
    let elapsed = timer.stop();

    if remember && ctx.history_enabled() {
        let recorded = ctx
            .history()
            .and_then(|store| store.record(query).map_err(Into::into));
        if let Err(e) = recorded {
            tracing::warn!(error = %e, "Could not save recent query");
        }
    }

    if json {
        let results: Vec<_> = results
            .iter()
            .map(|result| {
                let mut entry = serde_json::json!({
                    "id": result.item.id,
                    "title": result.item.title,
                    "category": result.item.category,
                    "target": result.item.target,
                    "score": result.score,
                });
                if show_breakdown {
                    entry["breakdown"] = serde_json::to_value(explain(query, result.item))
                        .unwrap_or(serde_json::Value::Null);
                }
                entry
            })
            .collect();

        let output = serde_json::json!({
            "query": query,
            "count": results.len(),
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if results.is_empty() {
        Status::warning(&format!("No matches for \"{}\"", query));
        return Ok(());
    }

    println!();
    for (index, result) in results.iter().enumerate() {
        print_result(index + 1, result, query);
        if show_breakdown {
            if let Some(breakdown) = explain(query, result.item) {
                let parts: Vec<String> = breakdown
                    .contributions()
                    .into_iter()
                    .map(|(signal, points)| format!("{signal} +{points}"))
                    .collect();
                println!("     {}", parts.join(", ").dimmed());
            }
        }
    }
    println!();
    println!(
        "{}",
        format!(
            "{} in {}",
            format_count(results.len(), "result", "results"),
            format_latency(elapsed)
        )
        .dimmed()
    );

    Ok(())
}
