//! Catalog command - validate files and inspect items

use crate::context::AppContext;
use anyhow::Result;
use folio_cli::output::{format_count, target_label, Status};
use folio_core::catalog::load_catalog;
use folio_core::Error;
use owo_colors::OwoColorize;
use std::path::Path;

/// Parse a catalog file and report what it holds
pub fn validate(path: &Path, json: bool) -> Result<()> {
    folio_telemetry::timed_span!("catalog_validate", path = %path.display());
    let catalog = load_catalog(path)?;

    if json {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "valid": true,
            "items": catalog.len(),
            "categories": catalog.categories(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::success(&format!(
        "{} is valid: {} in {}",
        path.display(),
        format_count(catalog.len(), "item", "items"),
        format_count(catalog.categories().len(), "category", "categories")
    ));

    Ok(())
}

/// Print one item in full
pub fn show(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let item = ctx.catalog.get(id).ok_or_else(|| Error::unknown_item(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    Status::header(&item.title);
    println!("  {}  {}", "id:".dimmed(), item.id);
    println!("  {}  {}", "category:".dimmed(), item.category);
    println!("  {}  {}", "target:".dimmed(), target_label(&item.target));
    if !item.description.is_empty() {
        println!("  {}  {}", "description:".dimmed(), item.description);
    }
    if !item.keywords.is_empty() {
        println!("  {}  {}", "keywords:".dimmed(), item.keywords.join(", "));
    }

    Ok(())
}

/// List categories in order of first appearance
pub fn categories(ctx: &AppContext, json: bool) -> Result<()> {
    let categories = ctx.catalog.categories();

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    for category in categories {
        let count = ctx
            .catalog
            .iter()
            .filter(|item| item.category == category)
            .count();
        println!("{}  {}", category.bold(), format_count(count, "item", "items").dimmed());
    }

    Ok(())
}
