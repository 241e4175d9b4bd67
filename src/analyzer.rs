// src/analyzer.rs
// =============================================================================
// The Analysis Orchestrator: fetch -> parse -> extract -> probe -> summarise.
//
// What happens in one analysis:
// 1. Validate the page address (a bad address is a configuration error)
// 2. Fetch the page (anything but 200 OK is fatal) and decode its text
// 3. Parse it and read everything we need from the tree in one synchronous
//    step (`inspect_document`); the tree is dropped before any further I/O
// 4. Probe the distinct external links concurrently
// 5. Fold the counts into an AnalysisResult
//
// Rust concepts:
// - Structs with serde attributes: control the JSON field names
// - Ownership: the parsed tree never leaves inspect_document, so the async
//   part of the analysis only carries owned Strings and counts
// =============================================================================

use crate::config::AnalyzerConfig;
use crate::document::{heading_counts, html_version, page_title, parse_document, HeadingCounts};
use crate::error::{AnalysisError, Result};
use crate::fetch::fetch_page;
use crate::links::{classify_links, parse_base_url, probe_links, LinkRecord, ProbeOutcome, ProbeSettings};
use crate::login::has_login_form;
use log::info;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use url::Url;

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Structural summary of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub html_version: String,
    #[serde(rename = "pageTitle")]
    pub title: String,
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    pub internal_links_count: usize,
    pub external_links_count: usize,
    /// Never larger than `external_links_count`
    pub broken_links_count: usize,
    pub has_login_form: bool,
}

/// An external link that turned out to be broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLink {
    pub url: String,
    /// Set when the link answered with a 4xx/5xx
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Set when the link could not be reached at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// AnalysisResult plus the details behind the broken-link count.
///
/// `broken_links` lists each distinct broken URL once, while the count in
/// `result` counts every anchor pointing at one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub base_url: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub broken_links: Vec<BrokenLink>,
    /// External links whose probe didn't finish before the deadline
    pub unprobed_links: usize,
}

/// Everything read from the document tree, detached from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutline {
    pub html_version: String,
    pub title: String,
    pub headings: HeadingCounts,
    pub links: Vec<LinkRecord>,
    pub has_login_form: bool,
}

// Parses the body and extracts every tree-derived fact of the page
pub fn inspect_document(base: &Url, body: &str) -> PageOutline {
    let document = parse_document(body);
    let root = document.tree.root();

    PageOutline {
        html_version: html_version(root),
        title: page_title(root),
        headings: heading_counts(root),
        links: classify_links(root, base),
        has_login_form: has_login_form(root),
    }
}

/// Runs page analyses with one shared HTTP client.
///
/// Analyses share nothing but the client's connection pool, so one
/// `Analyzer` can serve many concurrent calls.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Client,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(AnalysisError::Client)?;

        Ok(Self { client, config })
    }

    /// Analyses the page at `address`.
    pub async fn analyze(&self, address: &str) -> Result<AnalysisResult> {
        self.report(address).await.map(|report| report.result)
    }

    /// Like [`Analyzer::analyze`], but keeps the broken-link details.
    pub async fn report(&self, address: &str) -> Result<PageReport> {
        let started = Instant::now();
        let base = parse_base_url(address)?;

        let body = fetch_page(&self.client, base.as_str()).await?;
        let outline = inspect_document(&base, &body);
        drop(body);

        let (external, internal): (Vec<&LinkRecord>, Vec<&LinkRecord>) =
            outline.links.iter().partition(|link| link.is_external());

        // Each distinct URL is probed once, however many anchors point at it
        let mut targets: Vec<String> = external.iter().map(|link| link.href.clone()).collect();
        targets.sort();
        targets.dedup();

        let outcomes: HashMap<String, ProbeOutcome> =
            probe_links(&self.client, targets, &self.probe_settings())
                .await
                .into_iter()
                .map(|probe| (probe.url, probe.outcome))
                .collect();

        let is_broken = |href: &str| outcomes.get(href).is_some_and(ProbeOutcome::is_broken);
        let broken_links_count = external.iter().filter(|link| is_broken(link.href.as_str())).count();
        let unprobed_links = external
            .iter()
            .filter(|link| matches!(outcomes.get(&link.href), Some(ProbeOutcome::Abandoned) | None))
            .count();

        let mut broken_links: Vec<BrokenLink> = outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_broken())
            .map(|(url, outcome)| broken_link(url, outcome))
            .collect();
        broken_links.sort_by(|a, b| a.url.cmp(&b.url));

        let result = AnalysisResult {
            html_version: outline.html_version,
            title: outline.title,
            h1_count: outline.headings.h1,
            h2_count: outline.headings.h2,
            h3_count: outline.headings.h3,
            h4_count: outline.headings.h4,
            internal_links_count: internal.len(),
            external_links_count: external.len(),
            broken_links_count,
            has_login_form: outline.has_login_form,
        };

        info!(
            "Analyzed {} in {:?}: {} internal, {} external, {} broken link(s)",
            base,
            started.elapsed(),
            result.internal_links_count,
            result.external_links_count,
            result.broken_links_count
        );

        Ok(PageReport {
            base_url: base.to_string(),
            result,
            broken_links,
            unprobed_links,
        })
    }

    fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            user_agent: self.config.probe_user_agent.clone(),
            timeout: self.config.probe_timeout,
            max_concurrency: self.config.max_concurrency,
            deadline: self.config.probe_deadline,
        }
    }
}

fn broken_link(url: &str, outcome: &ProbeOutcome) -> BrokenLink {
    let (status_code, reason) = match outcome {
        ProbeOutcome::Responded { status } => (Some(*status), None),
        ProbeOutcome::Failed { reason } => (None, Some(reason.clone())),
        ProbeOutcome::Abandoned => (None, None),
    };

    BrokenLink {
        url: url.to_string(),
        status_code,
        reason,
    }
}
