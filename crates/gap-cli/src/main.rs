//! `campsite-search` CLI — find campsites available for a date range.
//!
//! ## Usage
//!
//! ```sh
//! # Print the names of available campsites
//! campsite-search test-case.json
//!
//! # Read the search document from stdin
//! cat test-case.json | campsite-search
//!
//! # Print the available campsite records as JSON
//! campsite-search test-case.json --format json
//!
//! # Show why each campsite was admitted or rejected
//! campsite-search test-case.json --explain
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gap_engine::{Query, SiteReport};
use std::io::{self, IsTerminal, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "campsite-search",
    version,
    about = "Find campsites available for a date range under gap rules"
)]
struct Cli {
    /// Search document (reads from stdin if omitted)
    input: Option<String>,

    /// Output format for the available campsites
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the verdict and gaps for every campsite
    #[arg(long, conflicts_with = "format")]
    explain: bool,

    /// Log each campsite evaluation to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One campsite name per line
    Text,
    /// Pretty-printed JSON array of campsite records
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = read_input(cli.input.as_deref())?;
    let query = Query::from_json(&json).context("Failed to load search document")?;

    if cli.explain {
        for report in query.evaluate() {
            println!("{}", explain_line(&report));
        }
        return Ok(());
    }

    let sites = query.available_sites();
    info!(
        search = %query.search,
        available = sites.len(),
        campsites = query.campsites.len(),
        "search complete"
    );

    match cli.format {
        Format::Text => {
            for site in &sites {
                println!("{}", site.name);
            }
        }
        Format::Json => {
            let pretty = serde_json::to_string_pretty(&sites)
                .context("Failed to serialize available campsites")?;
            println!("{}", pretty);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for piping. `RUST_LOG` overrides
/// the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn explain_line(report: &SiteReport<'_>) -> String {
    format!(
        "{}\t{}\t{}\t(before: {}, after: {})",
        report.campsite.id,
        report.campsite.name,
        report.verdict,
        report.gap_before,
        report.gap_after
    )
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
