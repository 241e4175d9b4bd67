// src/document/tag.rs
// =============================================================================
// The closed set of tag kinds the analysis cares about.
//
// Instead of matching tag names against patterns on every visit, each element
// name is mapped once to a TagKind and searches are driven by plain
// predicates over that enum (e.g. `TagKind::is_heading`).
// =============================================================================

/// What an element is, as far as page analysis is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Title,
    /// h1..h4; deeper levels are not reported and map to `Other`
    Heading(u8),
    Anchor,
    Input,
    Script,
    Link,
    Meta,
    Other,
}

impl TagKind {
    /// Maps an element name to its kind. html5ever lowercases HTML tag
    /// names, so the comparison is exact.
    pub fn of(name: &str) -> Self {
        match name {
            "title" => TagKind::Title,
            "h1" => TagKind::Heading(1),
            "h2" => TagKind::Heading(2),
            "h3" => TagKind::Heading(3),
            "h4" => TagKind::Heading(4),
            "a" => TagKind::Anchor,
            "input" => TagKind::Input,
            "script" => TagKind::Script,
            "link" => TagKind::Link,
            "meta" => TagKind::Meta,
            _ => TagKind::Other,
        }
    }

    /// Subtrees rooted at these elements are never searched.
    pub fn is_ignored(self) -> bool {
        matches!(self, TagKind::Script | TagKind::Link | TagKind::Meta)
    }

    pub fn is_title(self) -> bool {
        self == TagKind::Title
    }

    pub fn is_heading(self) -> bool {
        matches!(self, TagKind::Heading(_))
    }

    pub fn is_anchor(self) -> bool {
        self == TagKind::Anchor
    }

    pub fn is_input(self) -> bool {
        self == TagKind::Input
    }
}
