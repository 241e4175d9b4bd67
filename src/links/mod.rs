// src/links/mod.rs
// =============================================================================
// This module contains all link logic.
//
// Submodules:
// - classify: finds the anchors of a page and splits them into internal and
//   external links
// - probe: makes HTTP requests to check if external links are alive
// =============================================================================

mod classify;
mod probe;

pub use classify::{classify_href, classify_links, parse_base_url, LinkKind, LinkRecord};
pub use probe::{probe_links, ProbeOutcome, ProbeResult, ProbeSettings};
