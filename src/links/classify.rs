// src/links/classify.rs
// =============================================================================
// This module extracts the links of a page and sorts them into internal and
// external ones.
//
// A link is external only when its href starts with an explicit http:// or
// https:// scheme AND points at a different origin than the page. Everything
// else (relative paths, fragments, mailto:, protocol-relative //host links)
// is counted as internal: without a scheme we can't say for sure that it
// leaves the site.
//
// We use the `url` crate to:
// - Parse and validate the page address
// - Compare origins (scheme + host + port)
//
// Rust concepts:
// - Enums: LinkKind is either Internal or External
// - Iterators: flat_map over the anchor groups
// =============================================================================

use crate::document::{collect_all, TagKind};
use crate::error::{AnalysisError, Result};
use ego_tree::NodeRef;
use log::debug;
use scraper::Node;
use url::Url;

/// Where a link points, relative to the page it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
}

/// One anchor of the page and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub href: String,
    pub kind: LinkKind,
}

impl LinkRecord {
    pub fn is_external(&self) -> bool {
        self.kind == LinkKind::External
    }
}

// Parses the address of the page under analysis
//
// A page address we can't parse is a configuration error for the whole
// analysis, not something to skip over.
pub fn parse_base_url(address: &str) -> Result<Url> {
    let base = Url::parse(address).map_err(|e| AnalysisError::InvalidUrl {
        url: address.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
        return Err(AnalysisError::InvalidUrl {
            url: address.to_string(),
            reason: "expected an http:// or https:// address with a host".to_string(),
        });
    }

    Ok(base)
}

// Collects every <a> of the document (in document order) and classifies it
//
// Anchors without an href are kept with an empty href, which is internal.
pub fn classify_links(root: NodeRef<'_, Node>, base: &Url) -> Vec<LinkRecord> {
    let anchors = collect_all(root, TagKind::is_anchor);

    anchors
        .into_values()
        .flatten()
        .map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or("").to_string();
            let kind = classify_href(&href, base);
            debug!("{:?} link: {}", kind, href);
            LinkRecord { href, kind }
        })
        .collect()
}

// Decides whether a single href leaves the page's origin
pub fn classify_href(href: &str, base: &Url) -> LinkKind {
    if !has_explicit_http_scheme(href) {
        return LinkKind::Internal;
    }

    match Url::parse(href) {
        Ok(target) if target.origin() == base.origin() => LinkKind::Internal,
        // An unparseable absolute link can't be same-origin either
        _ => LinkKind::External,
    }
}

fn has_explicit_http_scheme(href: &str) -> bool {
    let href = href.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is an origin?
//    - scheme + host + port, e.g. ("https", "example.com", 443)
//    - https://example.com and https://example.com:443/about share an origin
//    - http://example.com and https://example.com do NOT
//
// 2. Why `href.get(..n)` instead of `&href[..n]`?
//    - Slicing panics if n is past the end or inside a multi-byte character
//    - .get() returns None instead
//
// 3. Why is_some_and?
//    - Shorthand for `matches!(opt, Some(x) if condition(x))`
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn base() -> Url {
        Url::parse("https://mysite.example/blog/post").unwrap()
    }

    #[test]
    fn test_relative_link_is_internal() {
        assert_eq!(classify_href("/about", &base()), LinkKind::Internal);
        assert_eq!(
            classify_href("/about", &Url::parse("http://another.example").unwrap()),
            LinkKind::Internal
        );
    }

    #[test]
    fn test_other_domain_is_external() {
        assert_eq!(
            classify_href("https://other-domain.example/x", &base()),
            LinkKind::External
        );
    }

    #[test]
    fn test_same_origin_absolute_is_internal() {
        assert_eq!(
            classify_href("https://mysite.example/contact", &base()),
            LinkKind::Internal
        );
        assert_eq!(
            classify_href("HTTPS://MYSITE.EXAMPLE:443/", &base()),
            LinkKind::Internal
        );
    }

    #[test]
    fn test_scheme_or_port_change_is_external() {
        assert_eq!(classify_href("http://mysite.example/", &base()), LinkKind::External);
        assert_eq!(
            classify_href("https://mysite.example:8443/", &base()),
            LinkKind::External
        );
    }

    #[test]
    fn test_lookalike_host_is_external() {
        assert_eq!(
            classify_href("https://mysite.example.evil/", &base()),
            LinkKind::External
        );
    }

    #[test]
    fn test_schemeless_links_are_internal() {
        for href in ["#top", "", "mailto:me@example.com", "//cdn.example/x", "javascript:void(0)"] {
            assert_eq!(classify_href(href, &base()), LinkKind::Internal, "{}", href);
        }
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://example.com/file").is_err());
        assert!(parse_base_url("https://example.com").is_ok());
    }

    #[test]
    fn test_classify_document_links() {
        let html = Html::parse_document(
            r#"<a href="/docs">Docs</a>
               <a href="https://www.rust-lang.org">Rust</a>
               <a>no href</a>
               <a href="https://mysite.example/">Home</a>"#,
        );
        let links = classify_links(html.tree.root(), &base());
        assert_eq!(links.len(), 4);
        assert_eq!(links.iter().filter(|l| l.is_external()).count(), 1);
        assert!(links.iter().any(|l| l.href.is_empty() && l.kind == LinkKind::Internal));
    }
}
