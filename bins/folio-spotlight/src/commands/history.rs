//! History command - recent queries

use crate::context::AppContext;
use anyhow::Result;
use folio_cli::output::Status;
use owo_colors::OwoColorize;

/// Show recent queries, most recent first
pub fn run(ctx: &AppContext, prefix: Option<&str>, json: bool) -> Result<()> {
    let store = ctx.history()?;
    let entries = match prefix {
        Some(prefix) => store.suggestions(prefix),
        None => store.load(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        Status::info("No recent queries");
        return Ok(());
    }

    Status::header("Recent queries");
    for (index, entry) in entries.iter().enumerate() {
        println!("{:>3}. {}", (index + 1).dimmed(), entry);
    }

    Ok(())
}

/// Forget all recent queries
pub fn clear(ctx: &AppContext, json: bool) -> Result<()> {
    let store = ctx.history()?;
    store.clear()?;

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        Status::success("Recent queries cleared");
    }

    Ok(())
}
