// src/document/search.rs
// =============================================================================
// Tag Locator and Tag Collector: depth-first searches over the parsed tree.
//
// Both walk the tree in document order (pre-order) and never descend into
// <script>, <link> or <meta> elements. The walk uses an explicit stack, so a
// pathologically deep document cannot overflow the call stack.
//
// Rust concepts:
// - Lifetimes: every ElementRef<'a> we hand out borrows from the tree, so it
//   can never outlive the parsed document
// - ControlFlow: lets the visitor stop the walk early (first match wins)
// - Generic predicates: `impl Fn(TagKind) -> bool`
// =============================================================================

use super::tag::TagKind;
use ego_tree::NodeRef;
use scraper::{ElementRef, Node};
use std::collections::HashMap;
use std::ops::ControlFlow;

/// Matching elements grouped by exact tag name, each group in document order.
pub type TagGroups<'a> = HashMap<&'a str, Vec<ElementRef<'a>>>;

// Visits every element under `root` (root included) in pre-order, skipping
// the subtrees of ignored elements below the root.
fn walk_elements<'a, F>(root: NodeRef<'a, Node>, mut visit: F)
where
    F: FnMut(ElementRef<'a>, TagKind) -> ControlFlow<()>,
{
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Some(element) = ElementRef::wrap(node) {
            let kind = TagKind::of(element.value().name());

            if node != root && kind.is_ignored() {
                continue;
            }

            if visit(element, kind).is_break() {
                return;
            }
        }

        // Reversed so the first child is popped first
        stack.extend(node.children().rev());
    }
}

/// Returns the first element (in document order) whose kind matches.
pub fn find_first<'a>(
    root: NodeRef<'a, Node>,
    matches: impl Fn(TagKind) -> bool,
) -> Option<ElementRef<'a>> {
    let mut found = None;

    walk_elements(root, |element, kind| {
        if matches(kind) {
            found = Some(element);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    found
}

/// Returns every element whose kind matches, grouped by tag name.
pub fn collect_all<'a>(root: NodeRef<'a, Node>, matches: impl Fn(TagKind) -> bool) -> TagGroups<'a> {
    let mut groups: TagGroups<'a> = HashMap::new();

    walk_elements(root, |element, kind| {
        if matches(kind) {
            groups.entry(element.value().name()).or_default().push(element);
        }
        ControlFlow::Continue(())
    });

    groups
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an explicit stack instead of recursion?
//    - Each recursive call uses stack space
//    - HTML can nest thousands of levels deep (broken or hostile pages)
//    - A Vec on the heap grows as needed instead
//
// 2. Why push the children in reverse?
//    - A stack is last-in, first-out
//    - Pushing [c3, c2, c1] means c1 comes out first, which keeps
//      document order
//
// 3. What does `node != root` protect?
//    - The skip-list only applies to descendants; searching *inside* a
//      <script> you were handed explicitly still works
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn texts(elements: &[ElementRef<'_>]) -> Vec<String> {
        elements.iter().map(|e| e.text().collect::<String>()).collect()
    }

    #[test]
    fn test_find_first_in_document_order() {
        let html = Html::parse_document("<h2>b</h2><div><h1>a</h1></div><h1>c</h1>");
        let found = find_first(html.tree.root(), TagKind::is_heading).unwrap();
        assert_eq!(found.value().name(), "h2");
    }

    #[test]
    fn test_find_first_missing() {
        let html = Html::parse_document("<p>no title here</p>");
        assert!(find_first(html.tree.root(), TagKind::is_title).is_none());
    }

    #[test]
    fn test_collect_groups_by_name() {
        let html = Html::parse_document(
            "<h1>one</h1><section><h2>two</h2><h2>three</h2></section><h3>four</h3>",
        );
        let groups = collect_all(html.tree.root(), TagKind::is_heading);
        assert_eq!(texts(&groups["h1"]), vec!["one"]);
        assert_eq!(texts(&groups["h2"]), vec!["two", "three"]);
        assert_eq!(groups["h3"].len(), 1);
        assert!(!groups.contains_key("h4"));
    }

    #[test]
    fn test_ignored_subtrees_are_skipped() {
        // Inside <svg>, <script> is a foreign element that can hold children
        let html = Html::parse_document(
            r#"<body><svg><script><a href="/hidden">x</a></script></svg>
               <a href="/visible">y</a></body>"#,
        );
        let groups = collect_all(html.tree.root(), TagKind::is_anchor);
        assert_eq!(groups["a"].len(), 1);
        assert_eq!(groups["a"][0].value().attr("href"), Some("/visible"));
    }

    #[test]
    fn test_search_starting_at_ignored_root() {
        let html = Html::parse_document(r#"<svg><script><a href="/x">x</a></script></svg>"#);
        let script = html
            .tree
            .root()
            .descendants()
            .find(|n| n.value().as_element().map(|e| e.name()) == Some("script"))
            .unwrap();
        assert!(find_first(script, TagKind::is_anchor).is_some());
    }
}
