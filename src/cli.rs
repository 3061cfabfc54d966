// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   docs-scraper <MODE> [-o pretty|file|json] [-c] [--base-dir DIR]
//
// The mode picks one extractor, --output picks how its rows are shown and
// --clear-cache empties the response cache before anything is fetched.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::{CACHE_DIR, DOWNLOADS_DIR, LOG_DIR, RESULTS_DIR};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "docs-scraper",
    version,
    about = "Scrapes the Python documentation and PEP index",
    long_about = "docs-scraper collects release notes, documentation versions and PEP status \
                  counts from docs.python.org and peps.python.org, or downloads the A4 PDF \
                  archive of the documentation."
)]
pub struct Cli {
    /// What to scrape
    ///
    /// This is a positional argument (required, no flag needed)
    #[arg(value_enum)]
    pub mode: Mode,

    /// How to output the results (default: print rows to the console)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Clear the response cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Directory that holds downloads/, results/, logs/ and the cache
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,
}

impl Cli {
    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir.join(DOWNLOADS_DIR)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.base_dir.join(RESULTS_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.base_dir.join(CACHE_DIR)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join(LOG_DIR)
    }
}

// The four extractors. clap turns the variant names into kebab-case values:
// whats-new, latest-versions, download, pep
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Articles from the "What's New" section
    WhatsNew,
    /// Documentation links for every Python version
    LatestVersions,
    /// Download the A4 PDF archive of the documentation
    Download,
    /// Count PEPs by status
    Pep,
}

impl Mode {
    /// The name used on the command line and in result file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table on the console
    Pretty,
    /// CSV file under results/
    File,
    /// JSON array of rows on the console
    Json,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is ValueEnum?
//    - It lets clap parse a plain string argument into one of our enum variants
//    - Invalid values are rejected with a list of the accepted ones
//
// 2. Why Option<OutputFormat>?
//    - Leaving out --output is meaningful: rows are printed as plain lines
//    - None represents "no flag given" without inventing a fake variant
//
// 3. Why PathBuf for base_dir?
//    - PathBuf is the owned path type, like String is the owned string type
//    - .join() builds child paths without worrying about separators
// -----------------------------------------------------------------------------
