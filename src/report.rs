// src/report.rs
// =============================================================================
// What happened during a run, besides the rows themselves.
//
// Extractors do not log skipped pages or status mismatches as they go. They
// record them here and hand the report back with their table; main.rs then
// logs it in one place.
// =============================================================================

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::ScrapeError;

/// A page that could not be loaded and was left out of the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub url: String,
    pub reason: String,
}

/// A PEP whose page status is not one its index code allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMismatch {
    pub url: String,
    pub actual: String,
    pub expected: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub skipped: Vec<SkippedItem>,
    pub mismatches: Vec<StatusMismatch>,
    pub saved_files: Vec<PathBuf>,
}

impl RunReport {
    pub fn record_skip(&mut self, url: &str, error: &ScrapeError) {
        self.skipped.push(SkippedItem {
            url: url.to_string(),
            reason: error.to_string(),
        });
    }

    pub fn record_mismatch(&mut self, url: &str, actual: &str, expected: &[&str]) {
        self.mismatches.push(StatusMismatch {
            url: url.to_string(),
            actual: actual.to_string(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        });
    }

    pub fn record_saved(&mut self, path: PathBuf) {
        self.saved_files.push(path);
    }

    /// Writes the report to the log
    pub fn log(&self) {
        for item in &self.skipped {
            warn!(url = %item.url, reason = %item.reason, "page skipped");
        }

        if !self.mismatches.is_empty() {
            info!("{}", self.mismatch_summary());
        }

        for path in &self.saved_files {
            info!(path = %path.display(), "archive downloaded and saved");
        }
    }

    /// Mismatched statuses as one multi-line block
    pub fn mismatch_summary(&self) -> String {
        let mut summary = String::from("Mismatched statuses:\n");
        for mismatch in &self.mismatches {
            summary.push_str(&format!(
                "{}\nStatus on page: {}\nExpected statuses: {}\n",
                mismatch.url,
                mismatch.actual,
                mismatch.expected.join(", ")
            ));
        }
        summary
    }
}
