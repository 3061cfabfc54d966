// src/parse/find.rs

use super::node::Node;
use super::query::TagQuery;
use crate::error::{Result, ScrapeError};

/// Returns the first element below `container` that matches `query`.
///
/// Fails with `ScrapeError::TagNotFound` when nothing matches. Callers are
/// not expected to recover from that: it means the page layout changed.
pub fn find_tag<N: Node>(container: &N, query: &TagQuery) -> Result<N> {
    container
        .element_descendants()
        .into_iter()
        .find(|node| query.matches(node))
        .ok_or_else(|| ScrapeError::TagNotFound {
            query: query.to_string(),
        })
}

/// Returns every element below `container` that matches `query`, in
/// document order. An empty result is not an error.
pub fn find_all<N: Node>(container: &N, query: &TagQuery) -> Vec<N> {
    container
        .element_descendants()
        .into_iter()
        .filter(|node| query.matches(node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PAGE: &str = r#"
        <html><body>
          <section id="what-s-new-in-python">
            <div class="toctree-wrapper compound">
              <ul>
                <li class="toctree-l1"><a href="3.12.html">3.12</a></li>
                <li class="toctree-l1"><a href="3.11.html">3.11</a></li>
                <li class="toctree-l2"><a href="x.html">nested</a></li>
              </ul>
            </div>
          </section>
        </body></html>
    "#;

    #[test]
    fn test_find_tag_returns_first_match() {
        let doc = Html::parse_document(PAGE);
        let a = find_tag(&doc.root_element(), &TagQuery::new("a")).unwrap();
        assert_eq!(a.attr("href"), Some("3.12.html"));
    }

    #[test]
    fn test_find_tag_searches_inside_container_only() {
        let doc = Html::parse_document(PAGE);
        let root = doc.root_element();
        let li = find_all(&root, &TagQuery::new("li"))[1];
        let a = find_tag(&li, &TagQuery::new("a")).unwrap();
        assert_eq!(a.text_content(), "3.11");
    }

    #[test]
    fn test_find_tag_missing_is_tag_not_found() {
        let doc = Html::parse_document(PAGE);
        let err = find_tag(&doc.root_element(), &TagQuery::new("table").attr("class", "docutils"))
            .unwrap_err();
        match err {
            ScrapeError::TagNotFound { query } => assert_eq!(query, r#"table[class="docutils"]"#),
            other => panic!("expected TagNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_find_all_filters_by_class() {
        let doc = Html::parse_document(PAGE);
        let items = find_all(
            &doc.root_element(),
            &TagQuery::new("li").attr("class", "toctree-l1"),
        );
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_find_all_empty_is_ok() {
        let doc = Html::parse_document(PAGE);
        assert!(find_all(&doc.root_element(), &TagQuery::new("table")).is_empty());
    }
}
