// src/modes/mod.rs
// =============================================================================
// This module contains the four extractors, one per CLI mode.
//
// Submodules:
// - whats_new: article link, title and editors for every "What's New" page
// - latest_versions: documentation link, version and status per release
// - download: saves the A4 PDF archive of the documentation
// - pep: counts PEPs per status and reports index/page disagreements
//
// Every extractor takes a PageSource and returns a ModeOutcome. Page loads
// that fail inside a loop are skipped and recorded in the report; any other
// error ends the run.
// =============================================================================

mod download;
mod latest_versions;
mod pep;
mod whats_new;

pub use download::download;
pub use latest_versions::latest_versions;
pub use pep::pep;
pub use whats_new::whats_new;

use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use crate::cli::{Cli, Mode};
use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::parse::Node;
use crate::report::RunReport;
use crate::table::Table;

/// Rows (if the mode produces any) plus what happened on the way
#[derive(Debug, Default)]
pub struct ModeOutcome {
    pub table: Option<Table>,
    pub report: RunReport,
}

/// Runs the extractor selected on the command line
pub async fn run<S: PageSource>(cli: &Cli, source: &mut S) -> Result<ModeOutcome> {
    match cli.mode {
        Mode::WhatsNew => whats_new(source).await,
        Mode::LatestVersions => latest_versions(source).await,
        Mode::Download => download(source, &cli.downloads_dir()).await,
        Mode::Pep => pep(source).await,
    }
}

// The href of an anchor. A link without one means the page is not shaped the
// way we expect.
fn href<N: Node>(anchor: &N) -> Result<String> {
    anchor
        .attr("href")
        .map(|href| href.to_string())
        .ok_or_else(|| ScrapeError::Structure(format!("<{}> without href", anchor.tag_name())))
}

// Resolves a possibly-relative href against the page it was found on
fn resolve(base: &Url, href: &str) -> Result<Url> {
    Ok(base.join(href)?)
}

fn progress_bar(len: usize, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message(label.to_string());
    bar
}
