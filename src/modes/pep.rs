// src/modes/pep.rs
// =============================================================================
// Counts PEPs by status.
//
// The numerical index on peps.python.org lists every PEP with a short code
// such as "SF" (type Standards, status Final). For each row we:
// 1. strip the type letter to get the preview status code ("F")
// 2. open the PEP page and read the authoritative status from its header
// 3. count that status, and record a mismatch if the preview code does not
//    allow it (see constants::expected_statuses)
//
// A PEP page that fails to load is skipped but still counted in the total,
// so the last row can be larger than the sum of the status rows.
// =============================================================================

use url::Url;

use super::{href, progress_bar, resolve, ModeOutcome};
use crate::constants::{expected_statuses, MAIN_PEP_URL, PEP_HEADER, PEP_TOTAL_LABEL};
use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::parse::{find_all, find_tag, parse_document, Node, TagQuery};
use crate::report::RunReport;
use crate::table::Table;

const STATUS_FIELD: &str = "Status";

// One row of the numerical index
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    preview_code: String,
    link: String,
}

/// Status -> count, kept in the order statuses were first seen
#[derive(Debug, Default)]
struct StatusTally {
    counts: Vec<(String, usize)>,
}

impl StatusTally {
    fn add(&mut self, status: &str) {
        match self.counts.iter_mut().find(|(seen, _)| seen == status) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((status.to_string(), 1)),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &(String, usize)> {
        self.counts.iter()
    }
}

pub async fn pep<S: PageSource>(source: &mut S) -> Result<ModeOutcome> {
    let index_url = Url::parse(MAIN_PEP_URL)?;
    let index_html = source.fetch(index_url.as_str()).await?;
    let entries = parse_index(&index_html, &index_url)?;

    let mut tally = StatusTally::default();
    let mut report = RunReport::default();
    let mut total = 0usize;

    let progress = progress_bar(entries.len(), "pep");
    for entry in entries {
        progress.inc(1);
        total += 1;

        let html = match source.fetch(&entry.link).await {
            Ok(html) => html,
            Err(e) if e.is_recoverable() => {
                report.record_skip(&entry.link, &e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let status = parse_status(&html)?;
        tally.add(&status);

        let expected = expected_statuses(&entry.preview_code);
        if !expected.contains(&status.as_str()) {
            report.record_mismatch(&entry.link, &status, expected);
        }
    }
    progress.finish_and_clear();

    let mut table = Table::with_header(&PEP_HEADER);
    for (status, count) in tally.iter() {
        table.push(vec![status.clone(), count.to_string()]);
    }
    table.push(vec![PEP_TOTAL_LABEL.to_string(), total.to_string()]);

    Ok(ModeOutcome {
        table: Some(table),
        report,
    })
}

fn parse_index(html: &str, index_url: &Url) -> Result<Vec<IndexEntry>> {
    let document = parse_document(html);
    let root = document.root_element();

    let numerical_index = find_tag(&root, &TagQuery::new("section").attr("id", "numerical-index"))?;
    let tbody = find_tag(&numerical_index, &TagQuery::new("tbody"))?;

    let mut entries = Vec::new();
    for row in find_all(&tbody, &TagQuery::new("tr")) {
        let abbr = find_tag(&row, &TagQuery::new("abbr"))?;
        let anchor = find_tag(&row, &TagQuery::new("a"))?;
        entries.push(IndexEntry {
            preview_code: abbr.text_content().chars().skip(1).collect(),
            link: resolve(index_url, &href(&anchor)?)?.to_string(),
        });
    }
    Ok(entries)
}

// The status in the PEP header block:
//   <dt>Status<span class="colon">:</span></dt>
//   <dd><abbr title="...">Final</abbr></dd>
fn parse_status(html: &str) -> Result<String> {
    let document = parse_document(html);
    let root = document.root_element();

    let header = find_tag(
        &root,
        &TagQuery::new("dl").attr("class", "rfc2822 field-list simple"),
    )?;
    let status_label = find_all(&header, &TagQuery::new("dt"))
        .into_iter()
        .find(|dt| dt.own_text().trim() == STATUS_FIELD)
        .ok_or_else(|| ScrapeError::Structure("PEP header has no Status field".to_string()))?;
    let status_value = status_label
        .next_element_sibling()
        .ok_or_else(|| ScrapeError::Structure("Status field has no value".to_string()))?;

    Ok(find_tag(&status_value, &TagQuery::new("abbr"))?.text_content())
}
