// src/modes/whats_new.rs
// =============================================================================
// Collects every "What's New In Python X.Y" article.
//
// Steps:
// 1. Load the whatsnew/ index and read the links of its table of contents
// 2. Load each article (a page that fails to load is skipped)
// 3. Take the article's <h1> and its first <dl> (the editor/author block)
//
// Output rows: (article link, title, editors with newlines turned into spaces)
// =============================================================================

use url::Url;

use super::{href, progress_bar, resolve, ModeOutcome};
use crate::constants::{MAIN_DOC_URL, WHATS_NEW_HEADER};
use crate::error::Result;
use crate::fetch::PageSource;
use crate::parse::{find_all, find_tag, parse_document, Node, TagQuery};
use crate::report::RunReport;
use crate::table::Table;

pub async fn whats_new<S: PageSource>(source: &mut S) -> Result<ModeOutcome> {
    let whats_new_url = Url::parse(MAIN_DOC_URL)?.join("whatsnew/")?;
    let index_html = source.fetch(whats_new_url.as_str()).await?;
    let article_links = parse_article_links(&index_html, &whats_new_url)?;

    let mut table = Table::with_header(&WHATS_NEW_HEADER);
    let mut report = RunReport::default();

    let progress = progress_bar(article_links.len(), "whats-new");
    for link in article_links {
        progress.inc(1);

        let html = match source.fetch(&link).await {
            Ok(html) => html,
            Err(e) if e.is_recoverable() => {
                report.record_skip(&link, &e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let (title, editors) = parse_article(&html)?;
        table.push(vec![link, title, editors]);
    }
    progress.finish_and_clear();

    Ok(ModeOutcome {
        table: Some(table),
        report,
    })
}

// Absolute links of the top-level entries in the whatsnew/ table of contents
fn parse_article_links(html: &str, page_url: &Url) -> Result<Vec<String>> {
    let document = parse_document(html);
    let root = document.root_element();

    let main_section = find_tag(&root, &TagQuery::new("section").attr("id", "what-s-new-in-python"))?;
    let toc = find_tag(&main_section, &TagQuery::new("div").attr("class", "toctree-wrapper"))?;

    let mut links = Vec::new();
    for item in find_all(&toc, &TagQuery::new("li").attr("class", "toctree-l1")) {
        let anchor = find_tag(&item, &TagQuery::new("a"))?;
        links.push(resolve(page_url, &href(&anchor)?)?.to_string());
    }
    Ok(links)
}

// (title, editors) of a single article
fn parse_article(html: &str) -> Result<(String, String)> {
    let document = parse_document(html);
    let root = document.root_element();

    let h1 = find_tag(&root, &TagQuery::new("h1"))?;
    let dl = find_tag(&root, &TagQuery::new("dl"))?;

    Ok((h1.text_content(), dl.text_content().replace('\n', " ")))
}
