//! Browse command - the catalog in order, as an empty query shows it

use crate::context::AppContext;
use anyhow::Result;
use folio_cli::output::{format_count, print_result, Status};
use folio_search::rank;

/// List catalog items, optionally limited to one category
pub fn run(ctx: &AppContext, category: Option<&str>, json: bool) -> Result<()> {
    let category = category.map(str::to_lowercase);
    let results: Vec<_> = rank("", ctx.catalog.items())
        .into_iter()
        .filter(|result| {
            category
                .as_deref()
                .is_none_or(|wanted| result.item.category.to_lowercase() == wanted)
        })
        .collect();

    if json {
        let items: Vec<_> = results.iter().map(|result| result.item).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    Status::header(&format!(
        "Catalog ({})",
        format_count(results.len(), "item", "items")
    ));
    for (index, result) in results.iter().enumerate() {
        print_result(index + 1, result, "");
    }

    Ok(())
}
