// src/error.rs
// =============================================================================
// Error kinds for the whole scraper.
//
// There are two families of failure and callers must treat them differently:
// - A page that could not be loaded is RECOVERABLE. Modes that loop over many
//   pages skip that one item and carry on.
// - Anything else is FATAL. A missing tag means the site layout no longer
//   matches what the extractors expect, so the run stops.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: generates From impls so `?` converts library errors for us
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The request failed, the body could not be read, or the server did not
    /// answer with a success status.
    #[error("failed to load page {url}: {reason}")]
    PageLoad { url: String, reason: String },

    /// A required element was not found in the document.
    #[error("tag not found: {query}")]
    TagNotFound { query: String },

    /// The page was parsed but its structure is not what we expect.
    #[error("unexpected page structure: {0}")]
    Structure(String),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ScrapeError {
    /// Builds a page-load error from anything printable
    pub fn page_load(url: &str, reason: impl std::fmt::Display) -> Self {
        ScrapeError::PageLoad {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True only for failures that affect a single page.
    ///
    /// Loop-based modes check this to decide between skipping the item and
    /// aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScrapeError::PageLoad { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_page_load_is_recoverable() {
        assert!(ScrapeError::page_load("https://example.com", "timeout").is_recoverable());
        assert!(!ScrapeError::TagNotFound { query: "h1".into() }.is_recoverable());
        assert!(!ScrapeError::Structure("no list".into()).is_recoverable());
    }

    #[test]
    fn test_page_load_message_names_url() {
        let err = ScrapeError::page_load("https://example.com/a", "HTTP 404");
        assert_eq!(
            err.to_string(),
            "failed to load page https://example.com/a: HTTP 404"
        );
    }
}
