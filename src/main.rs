// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr + logs/parser.log)
// 3. Open the response cache, clearing it first if asked to
// 4. Run the selected mode and log its report (skipped pages, mismatches)
// 5. Print or save the rows
// 6. Exit with 0 on success, 2 if the run was aborted
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod constants; // src/constants.rs - URLs, directory names, expected statuses
mod error; // src/error.rs - recoverable vs fatal errors
mod fetch; // src/fetch/ - cached HTTP session
mod logging; // src/logging.rs - tracing setup
mod modes; // src/modes/ - the four extractors
mod output; // src/output/ - console, pretty table, CSV, JSON
mod parse; // src/parse/ - tag queries over parsed HTML
mod report; // src/report.rs - skipped pages and status mismatches
mod table; // src/table.rs - header + rows

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use tracing::{error, info};

use cli::Cli;
use fetch::{CachedSession, ResponseCache};

// One thread is all we need: pages are fetched strictly one after another
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_dir()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(2);
    }

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: &Cli) -> Result<()> {
    info!("Parser started");
    info!(?cli, "Command line arguments");

    let cache = ResponseCache::open(cli.cache_dir())
        .with_context(|| format!("failed to open cache at {}", cli.cache_dir().display()))?;
    let cache_dir = cache.dir().to_path_buf();
    let mut session = CachedSession::new(cache)?;

    if cli.clear_cache {
        let removed = session.clear_cache()?;
        info!(removed, dir = %cache_dir.display(), "response cache cleared");
    }

    let outcome = modes::run(cli, &mut session)
        .await
        .with_context(|| format!("{} mode aborted", cli.mode.as_str()))?;

    outcome.report.log();

    if let Some(table) = &outcome.table {
        output::control_output(table, cli)?;
    }

    info!("Parser finished");
    Ok(())
}
