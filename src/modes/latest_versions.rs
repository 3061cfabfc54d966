// src/modes/latest_versions.rs
// =============================================================================
// Lists the documentation link, version and status of every Python release
// shown in the sidebar of the main documentation page.
//
// The sidebar has several <ul> lists; the one we want is the list whose text
// contains "All versions". If none does, the run stops: there is no other
// place to get this data from.
//
// Anchor text normally looks like "Python 3.12 (stable)". Text that does not
// match is kept whole as the version, with an empty status, while the link is
// always taken as-is.
// =============================================================================

use regex::Regex;

use super::{href, ModeOutcome};
use crate::constants::{LATEST_VERSIONS_HEADER, MAIN_DOC_URL};
use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::parse::{find_all, find_tag, parse_document, Node, TagQuery};
use crate::report::RunReport;
use crate::table::Table;

const VERSIONS_LIST_MARKER: &str = "All versions";
const VERSION_PATTERN: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";

pub async fn latest_versions<S: PageSource>(source: &mut S) -> Result<ModeOutcome> {
    let html = source.fetch(MAIN_DOC_URL).await?;
    let table = parse_versions(&html)?;

    Ok(ModeOutcome {
        table: Some(table),
        report: RunReport::default(),
    })
}

fn parse_versions(html: &str) -> Result<Table> {
    let document = parse_document(html);
    let root = document.root_element();

    let sidebar = find_tag(&root, &TagQuery::new("div").attr("class", "sphinxsidebarwrapper"))?;
    let versions_list = find_all(&sidebar, &TagQuery::new("ul"))
        .into_iter()
        .find(|ul| ul.text_content().contains(VERSIONS_LIST_MARKER))
        .ok_or_else(|| {
            ScrapeError::Structure(format!(
                "no sidebar list contains \"{}\"",
                VERSIONS_LIST_MARKER
            ))
        })?;

    let pattern = Regex::new(VERSION_PATTERN)?;
    let mut table = Table::with_header(&LATEST_VERSIONS_HEADER);

    for anchor in find_all(&versions_list, &TagQuery::new("a")) {
        let link = href(&anchor)?;
        let text = anchor.text_content();
        let (version, status) = split_version(&pattern, &text);
        table.push(vec![link, version, status]);
    }

    Ok(table)
}

// "Python 3.10 (stable)" -> ("3.10", "stable"); anything else -> (text, "")
fn split_version(pattern: &Regex, text: &str) -> (String, String) {
    match pattern.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FakeSource;

    const MAIN_PAGE: &str = r#"
        <html><body>
        <div class="sphinxsidebar"><div class="sphinxsidebarwrapper">
          <h3>Download</h3>
          <ul><li><a href="download.html">Download these documents</a></li></ul>
          <h3>Docs by version</h3>
          <ul>
            <li><a href="https://docs.python.org/3.13/">Python 3.13 (in development)</a></li>
            <li><a href="https://docs.python.org/3.10/">Python 3.10 (stable)</a></li>
            <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
          </ul>
        </div></div>
        </body></html>
    "#;

    fn pattern() -> Regex {
        Regex::new(VERSION_PATTERN).unwrap()
    }

    #[test]
    fn test_split_matching_text() {
        assert_eq!(
            split_version(&pattern(), "Python 3.10 (stable)"),
            ("3.10".to_string(), "stable".to_string())
        );
    }

    #[test]
    fn test_split_non_matching_text_keeps_it_whole() {
        assert_eq!(
            split_version(&pattern(), "Some Label"),
            ("Some Label".to_string(), String::new())
        );
    }

    #[tokio::test]
    async fn test_rows_from_versions_list() {
        let mut source = FakeSource::new().page(MAIN_DOC_URL, MAIN_PAGE);
        let table = latest_versions(&mut source).await.unwrap().table.unwrap();

        assert_eq!(table.header(), &LATEST_VERSIONS_HEADER.map(String::from).to_vec());
        assert_eq!(
            table.body(),
            &[
                vec![
                    "https://docs.python.org/3.13/".to_string(),
                    "3.13".to_string(),
                    "in development".to_string()
                ],
                vec![
                    "https://docs.python.org/3.10/".to_string(),
                    "3.10".to_string(),
                    "stable".to_string()
                ],
                vec![
                    "https://www.python.org/doc/versions/".to_string(),
                    "All versions".to_string(),
                    String::new()
                ],
            ]
        );
    }

    #[tokio::test]
    async fn test_no_versions_list_aborts() {
        let page = r#"<html><body><div class="sphinxsidebarwrapper">
                        <ul><li><a href="download.html">Download</a></li></ul>
                      </div></body></html>"#;
        let mut source = FakeSource::new().page(MAIN_DOC_URL, page);

        let err = latest_versions(&mut source).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Structure(_)));
    }

    #[tokio::test]
    async fn test_missing_sidebar_is_tag_not_found() {
        let mut source = FakeSource::new().page(MAIN_DOC_URL, "<html><body></body></html>");
        let err = latest_versions(&mut source).await.unwrap_err();
        assert!(matches!(err, ScrapeError::TagNotFound { .. }));
    }
}
