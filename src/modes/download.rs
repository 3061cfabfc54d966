// src/modes/download.rs
// =============================================================================
// Downloads the A4 PDF archive of the documentation.
//
// The download page has a table of formats; we pick the link ending in
// "pdf-a4.zip", resolve it against the page URL and save the file under the
// downloads directory using the last segment of that URL as its name.
//
// The archive is fetched with fetch_bytes, so it never goes through the
// response cache. This mode produces no rows.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use super::{href, resolve, ModeOutcome};
use crate::constants::MAIN_DOC_URL;
use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::parse::{find_tag, parse_document, TagQuery};
use crate::report::RunReport;

const ARCHIVE_HREF_PATTERN: &str = r".+pdf-a4\.zip$";

pub async fn download<S: PageSource>(source: &mut S, downloads_dir: &Path) -> Result<ModeOutcome> {
    let downloads_url = Url::parse(MAIN_DOC_URL)?.join("download.html")?;
    let html = source.fetch(downloads_url.as_str()).await?;
    let archive_url = find_archive_url(&html, &downloads_url)?;
    let archive_path = archive_path(downloads_dir, &archive_url)?;

    fs::create_dir_all(downloads_dir)?;
    debug!(url = %archive_url, "downloading archive");
    let bytes = source.fetch_bytes(archive_url.as_str()).await?;
    fs::write(&archive_path, &bytes)?;

    let mut report = RunReport::default();
    report.record_saved(archive_path);

    Ok(ModeOutcome {
        table: None,
        report,
    })
}

fn find_archive_url(html: &str, page_url: &Url) -> Result<Url> {
    let document = parse_document(html);
    let root = document.root_element();

    let main = find_tag(&root, &TagQuery::new("div").attr("role", "main"))?;
    let formats = find_tag(&main, &TagQuery::new("table").attr("class", "docutils"))?;
    let archive_link = find_tag(
        &formats,
        &TagQuery::new("a").attr_pattern("href", ARCHIVE_HREF_PATTERN)?,
    )?;

    resolve(page_url, &href(&archive_link)?)
}

// downloads/ + last path segment of the archive URL
fn archive_path(downloads_dir: &Path, archive_url: &Url) -> Result<PathBuf> {
    let filename = archive_url
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            ScrapeError::Structure(format!("archive url has no file name: {}", archive_url))
        })?;

    Ok(downloads_dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FakeSource;

    const DOWNLOAD_URL: &str = "https://docs.python.org/3/download.html";
    const ARCHIVE_URL: &str = "https://docs.python.org/3/archives/python-3.12.1-docs-pdf-a4.zip";

    const DOWNLOAD_PAGE: &str = r#"
        <html><body>
        <div class="body" role="main">
          <table class="docutils align-default">
            <tr><td>PDF (US-Letter)</td><td><a href="archives/python-3.12.1-docs-pdf-letter.zip">Download</a></td></tr>
            <tr><td>PDF (A4)</td><td><a href="archives/python-3.12.1-docs-pdf-a4.zip">Download</a></td></tr>
            <tr><td>HTML</td><td><a href="archives/python-3.12.1-docs-html.zip">Download</a></td></tr>
          </table>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_find_archive_url_resolves_link() {
        let page_url = Url::parse(DOWNLOAD_URL).unwrap();
        let url = find_archive_url(DOWNLOAD_PAGE, &page_url).unwrap();
        assert_eq!(url.as_str(), ARCHIVE_URL);
    }

    #[test]
    fn test_archive_path_uses_last_segment() {
        let url = Url::parse(ARCHIVE_URL).unwrap();
        let path = archive_path(Path::new("downloads"), &url).unwrap();
        assert_eq!(path, Path::new("downloads").join("python-3.12.1-docs-pdf-a4.zip"));
    }

    #[test]
    fn test_archive_path_rejects_directory_url() {
        let url = Url::parse("https://docs.python.org/3/archives/").unwrap();
        assert!(archive_path(Path::new("downloads"), &url).is_err());
    }

    #[tokio::test]
    async fn test_download_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let downloads_dir = tmp.path().join("downloads");
        let mut source = FakeSource::new()
            .page(DOWNLOAD_URL, DOWNLOAD_PAGE)
            .file(ARCHIVE_URL, b"PK\x03\x04zip");

        let outcome = download(&mut source, &downloads_dir).await.unwrap();

        assert!(outcome.table.is_none());
        let saved = &outcome.report.saved_files[0];
        assert_eq!(
            saved.file_name().unwrap().to_str().unwrap(),
            Url::parse(ARCHIVE_URL).unwrap().path_segments().unwrap().last().unwrap()
        );
        assert_eq!(fs::read(saved).unwrap(), b"PK\x03\x04zip");
    }

    #[tokio::test]
    async fn test_missing_archive_link_aborts() {
        let page = r#"<html><body><div role="main"><table class="docutils">
                        <tr><td><a href="archives/docs-html.zip">HTML</a></td></tr>
                      </table></div></body></html>"#;
        let tmp = tempfile::tempdir().unwrap();
        let mut source = FakeSource::new().page(DOWNLOAD_URL, page);

        let err = download(&mut source, tmp.path()).await.unwrap_err();
        assert!(matches!(err, ScrapeError::TagNotFound { .. }));
    }

    #[tokio::test]
    async fn test_failed_archive_fetch_is_returned() {
        let tmp = tempfile::tempdir().unwrap();
        let downloads_dir = tmp.path().join("downloads");
        let mut source = FakeSource::new().page(DOWNLOAD_URL, DOWNLOAD_PAGE);

        assert!(download(&mut source, &downloads_dir).await.is_err());
        assert!(!downloads_dir.join("python-3.12.1-docs-pdf-a4.zip").exists());
    }
}
