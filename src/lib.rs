// src/lib.rs
// =============================================================================
// page_analyzer: fetch one web page and summarise its structure.
//
// The summary (AnalysisResult) holds:
// - the markup version declared by the doctype
// - the page title
// - how many h1..h4 headings the page has
// - how many links stay on the site, how many leave it, and how many of the
//   outgoing ones are broken
// - whether the page has a login form
//
// Modules, leaf-first:
// - fetch: retrieves the page
// - document: parses it and searches the tree
// - links: classifies links and probes external ones
// - login: looks for credential inputs
// - analyzer: ties it all together
// =============================================================================

pub mod analyzer;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod links;
pub mod login;

pub use analyzer::{inspect_document, AnalysisResult, Analyzer, BrokenLink, PageOutline, PageReport};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ErrorKind, Result};

/// Analyses the page at `address` with the default configuration.
///
/// Fails when the address is invalid, the page can't be fetched with a 200,
/// or its body can't be parsed. Unreachable external links never fail the
/// analysis; they are counted as broken.
pub async fn analyze(address: &str) -> Result<AnalysisResult> {
    Analyzer::new(AnalyzerConfig::default())?.analyze(address).await
}
