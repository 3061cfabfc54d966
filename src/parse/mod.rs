// src/parse/mod.rs
// =============================================================================
// This module finds the elements our extractors depend on.
//
// Submodules:
// - node: a small tree-node interface (tag, attributes, children, text) and
//   its implementation for scraper's ElementRef
// - query: TagQuery, the "tag name + attribute matchers" search object
// - find: find_tag / find_all, which run a TagQuery over a subtree
//
// Every extractor goes through find_tag for the elements it cannot work
// without. A miss is a TagNotFound error and aborts the run.
// =============================================================================

mod find;
mod node;
mod query;

pub use find::{find_all, find_tag};
pub use node::Node;
pub use query::TagQuery;

use scraper::Html;

/// Parses a full HTML page.
///
/// Search with `document.root_element()` as the container.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Node trait instead of using scraper directly?
//    - The search logic only needs a handful of operations on an element
//    - Writing it against a trait keeps find_tag independent of the parser
//    - scraper's ElementRef implements the trait in node.rs
//
// 2. Why does parse_document return Html and not an element?
//    - ElementRef borrows from the Html that owns the tree
//    - The caller keeps the Html alive and borrows elements from it
// -----------------------------------------------------------------------------
