// src/constants.rs
// Fixed locations, file layout and lookup tables used by every mode.

pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const MAIN_PEP_URL: &str = "https://peps.python.org/";

pub const DOWNLOADS_DIR: &str = "downloads";
pub const RESULTS_DIR: &str = "results";
pub const CACHE_DIR: &str = "http_cache";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";

/// chrono format used in result file names, e.g. `pep_2024-03-01_12-30-05.csv`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub const WHATS_NEW_HEADER: [&str; 3] = ["Article link", "Title", "Editor, author"];
pub const LATEST_VERSIONS_HEADER: [&str; 3] = ["Documentation link", "Version", "Status"];
pub const PEP_HEADER: [&str; 2] = ["Status", "Count"];
pub const PEP_TOTAL_LABEL: &str = "Total (including unknown)";

// Preview code shown in the PEP index -> statuses a PEP page may carry for it.
// The empty code covers rows whose abbreviation has no status letter.
const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];

/// Statuses accepted for a preview code. Unknown codes accept nothing.
pub fn expected_statuses(preview_code: &str) -> &'static [&'static str] {
    EXPECTED_STATUS
        .iter()
        .find(|(code, _)| *code == preview_code)
        .map(|(_, statuses)| *statuses)
        .unwrap_or(&[])
}
