//! folio-spotlight: search the portfolio catalog from the terminal.

use clap::{Parser, Subcommand};
use folio_cli::output::Status;
use folio_core::error::exit_codes;
use std::path::PathBuf;
use std::process::ExitCode;

mod builtin;
mod commands;
mod context;

use commands::{browse, catalog, history, search};
use context::AppContext;

/// Spotlight search over the portfolio catalog
#[derive(Parser)]
#[command(name = "folio-spotlight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Configuration file (defaults to .folio.toml if present)
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog file, overriding the configured or built-in catalog
    #[arg(long, global = true, env = "FOLIO_CATALOG")]
    catalog: Option<PathBuf>,

    /// History file, overriding the configured location
    #[arg(long, global = true, env = "FOLIO_HISTORY")]
    history: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog items against a query
    Search {
        /// Query words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum results (defaults to search.limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show how each result scored
        #[arg(short, long)]
        explain: bool,

        /// Do not remember this query
        #[arg(long)]
        no_history: bool,
    },

    /// List the catalog in order, as an empty query would
    Browse {
        /// Only items in this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show or clear recent queries
    History {
        /// Only queries starting with this prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Forget all recent queries
        #[arg(long, conflicts_with = "prefix")]
        clear: bool,
    },

    /// Inspect catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Check a catalog file for parse errors and duplicate ids
    Validate {
        /// Path to a .json or .toml catalog
        path: PathBuf,
    },

    /// Show one item by id
    Show {
        /// Item id
        id: String,
    },

    /// List categories in catalog order
    Categories,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let core_error = e.downcast_ref::<folio_core::Error>();
            let code = core_error.map_or(exit_codes::FAILURE, folio_core::Error::exit_code);

            match core_error {
                Some(err) if json => match serde_json::to_string_pretty(&err.to_report()) {
                    Ok(report) => eprintln!("{report}"),
                    Err(_) => Status::error(&e.to_string()),
                },
                _ => Status::error(&e.to_string()),
            }

            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let json = cli.format == "json";
    let ctx = AppContext::load(
        cli.config.as_deref(),
        cli.catalog,
        cli.history,
        cli.verbose,
        json,
    )?;

    match cli.command {
        Commands::Search { query, limit, explain, no_history } => {
            let query = query.join(" ");
            search::run(&ctx, &query, limit, explain, !no_history, json)
        }

        Commands::Browse { category } => browse::run(&ctx, category.as_deref(), json),

        Commands::History { prefix, clear } => {
            if clear {
                history::clear(&ctx, json)
            } else {
                history::run(&ctx, prefix.as_deref(), json)
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Validate { path } => catalog::validate(&path, json),
            CatalogAction::Show { id } => catalog::show(&ctx, &id, json),
            CatalogAction::Categories => catalog::categories(&ctx, json),
        },
    }
}
