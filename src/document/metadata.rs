// src/document/metadata.rs
// =============================================================================
// Page-level facts read straight from the tree: the markup version declared
// by the doctype, the page title and how many headings of each level exist.
// =============================================================================

use super::search::{collect_all, find_first};
use super::tag::TagKind;
use ego_tree::NodeRef;
use scraper::Node;

const DTD_PREFIX: &str = "-//W3C//DTD ";
const DTD_SUFFIX: &str = "//EN";

/// Label reported for a doctype that carries no public identifier.
pub const HTML5: &str = "HTML5";

/// Derives the markup version from the first doctype in the tree.
///
/// `<!DOCTYPE html>` gives `"HTML5"`; a public identifier such as
/// `-//W3C//DTD HTML 4.01 Transitional//EN` gives `"HTML 4.01 Transitional"`.
/// A tree without any doctype gives an empty string.
///
/// Unlike the tag searches this looks at every node, ignored tags included.
pub fn html_version(root: NodeRef<'_, Node>) -> String {
    let doctype = root.descendants().find_map(|node| node.value().as_doctype());

    match doctype {
        None => String::new(),
        Some(doctype) if doctype.public_id().is_empty() => HTML5.to_string(),
        Some(doctype) => {
            let public = doctype.public_id();
            let public = public.strip_prefix(DTD_PREFIX).unwrap_or(public);
            let public = public.strip_suffix(DTD_SUFFIX).unwrap_or(public);
            public.to_string()
        }
    }
}

/// Text of the first `<title>`. Empty when there is no title element or it
/// holds no text.
///
/// Leading and trailing whitespace is trimmed, so `<title> Home </title>`
/// reports `"Home"` rather than the raw text node `" Home "`.
pub fn page_title(root: NodeRef<'_, Node>) -> String {
    find_first(root, TagKind::is_title)
        .and_then(|title| title.children().find_map(|child| child.value().as_text()))
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Number of headings per level, h1 through h4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
}

pub fn heading_counts(root: NodeRef<'_, Node>) -> HeadingCounts {
    let headings = collect_all(root, TagKind::is_heading);
    let count = |name: &str| headings.get(name).map_or(0, Vec::len);

    HeadingCounts {
        h1: count("h1"),
        h2: count("h2"),
        h3: count("h3"),
        h4: count("h4"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_html5_doctype() {
        let html = Html::parse_document("<!DOCTYPE html><html><body></body></html>");
        assert_eq!(html_version(html.tree.root()), "HTML5");
    }

    #[test]
    fn test_html401_transitional_doctype() {
        let html = Html::parse_document(
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd"><html></html>"#,
        );
        assert_eq!(html_version(html.tree.root()), "HTML 4.01 Transitional");
    }

    #[test]
    fn test_xhtml_strict_doctype() {
        let html = Html::parse_document(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"><html></html>"#,
        );
        assert_eq!(html_version(html.tree.root()), "XHTML 1.0 Strict");
    }

    #[test]
    fn test_legacy_compat_is_html5() {
        let html = Html::parse_document(r#"<!DOCTYPE html SYSTEM "about:legacy-compat"><p>x</p>"#);
        assert_eq!(html_version(html.tree.root()), "HTML5");
    }

    #[test]
    fn test_missing_doctype() {
        let html = Html::parse_document("<html><head><title>t</title></head></html>");
        assert_eq!(html_version(html.tree.root()), "");
    }

    #[test]
    fn test_title() {
        let html = Html::parse_document("<html><head><title> Hello, world </title></head></html>");
        assert_eq!(page_title(html.tree.root()), "Hello, world");
    }

    #[test]
    fn test_title_whitespace_is_trimmed() {
        let html = Html::parse_document("<title>\n    Home\n  </title>");
        assert_eq!(page_title(html.tree.root()), "Home");
    }

    #[test]
    fn test_empty_title_is_empty_string() {
        let html = Html::parse_document("<html><head><title></title></head></html>");
        assert_eq!(page_title(html.tree.root()), "");
    }

    #[test]
    fn test_missing_title_is_empty_string() {
        let html = Html::parse_document("<html><body><h1>No title</h1></body></html>");
        assert_eq!(page_title(html.tree.root()), "");
    }

    #[test]
    fn test_heading_counts() {
        let html = Html::parse_document(
            "<h1>a</h1><h2>b</h2><h2>c</h2><h4>d</h4><h5>ignored</h5><h6>ignored</h6>",
        );
        assert_eq!(
            heading_counts(html.tree.root()),
            HeadingCounts { h1: 1, h2: 2, h3: 0, h4: 1 }
        );
    }

    #[test]
    fn test_no_headings() {
        let html = Html::parse_document("<p>plain</p>");
        assert_eq!(heading_counts(html.tree.root()), HeadingCounts::default());
    }
}
