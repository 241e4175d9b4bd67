// src/login.rs
// =============================================================================
// Login Detector: a page "has a login form" when any <input> asks for an
// email address or a password.
// =============================================================================

use crate::document::{collect_all, TagKind};
use ego_tree::NodeRef;
use scraper::Node;

const CREDENTIAL_INPUT_TYPES: [&str; 2] = ["email", "password"];

pub fn has_login_form(root: NodeRef<'_, Node>) -> bool {
    collect_all(root, TagKind::is_input)
        .values()
        .flatten()
        .filter_map(|input| input.value().attr("type"))
        .any(|input_type| {
            CREDENTIAL_INPUT_TYPES
                .iter()
                .any(|credential| input_type.trim().eq_ignore_ascii_case(credential))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn detect(markup: &str) -> bool {
        let html = Html::parse_document(markup);
        has_login_form(html.tree.root())
    }

    #[test]
    fn test_password_input() {
        assert!(detect(r#"<form><input name="u"><input type="password"></form>"#));
    }

    #[test]
    fn test_email_input_outside_form() {
        assert!(detect(r#"<div><input type="EMAIL"></div>"#));
    }

    #[test]
    fn test_text_input_only() {
        assert!(!detect(r#"<form><input type="text"><input></form>"#));
    }

    #[test]
    fn test_no_inputs() {
        assert!(!detect("<p>Nothing to log into</p>"));
    }
}
