// src/document/mod.rs
// =============================================================================
// Everything that reads the parsed HTML tree.
//
// Submodules:
// - tag: the closed set of tag kinds and the ignore list
// - search: Tag Locator / Tag Collector (depth-first searches)
// - metadata: doctype version, title and heading counts
//
// Parsing itself is done by `scraper` (html5ever underneath). The tree is
// only ever borrowed: nothing here mutates it or keeps a node after the
// analysis that parsed it is over.
// =============================================================================

mod metadata;
mod search;
mod tag;

pub use metadata::{heading_counts, html_version, page_title, HeadingCounts};
pub use search::{collect_all, find_first, TagGroups};
pub use tag::TagKind;

use scraper::Html;

/// Builds a document tree from the decoded response body.
///
/// html5ever recovers from any malformed markup, so this never fails: an
/// empty or garbled body simply yields a sparse tree.
pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}
