// src/links/probe.rs
// =============================================================================
// This module checks whether external links are alive.
//
// Key functionality:
// - One GET per external link, sent with a browser-like User-Agent
// - A 4xx or 5xx answer marks the link broken
// - A probe that gets no answer at all (DNS, refused, timeout) also counts as
//   broken for that link; it never fails the whole analysis
// - Probes run concurrently, bounded by a worker limit
// - An overall deadline cancels whatever is still in flight
//
// Rust concepts:
// - Streams: buffer_unordered runs N futures at a time
// - tokio::time::timeout_at: wait for the next result, but not forever
// - Dropping a future cancels it
// =============================================================================

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// How to probe: request identification, limits and the overall deadline.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_concurrency: usize,
    pub deadline: Duration,
}

/// What happened when a link was probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Got an answer; `status` is the HTTP status code
    Responded { status: u16 },
    /// No answer at all (DNS, connect, timeout, invalid URL)
    Failed { reason: String },
    /// Still in flight when the deadline hit
    Abandoned,
}

impl ProbeOutcome {
    /// 4xx, 5xx and failed probes are broken; abandoned ones are unknown.
    pub fn is_broken(&self) -> bool {
        match self {
            ProbeOutcome::Responded { status } => is_error_status(*status),
            ProbeOutcome::Failed { .. } => true,
            ProbeOutcome::Abandoned => false,
        }
    }
}

/// The outcome of probing a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

// Status codes whose first digit is 4 or 5
fn is_error_status(status: u16) -> bool {
    (400..600).contains(&status)
}

// Probes every URL and returns one result per URL
//
// Results are in completion order, not input order. URLs whose probe had not
// finished when `settings.deadline` elapsed are returned as Abandoned.
pub async fn probe_links(client: &Client, urls: Vec<String>, settings: &ProbeSettings) -> Vec<ProbeResult> {
    if urls.is_empty() {
        return Vec::new();
    }

    let deadline = Instant::now() + settings.deadline;
    let mut pending: Vec<Option<String>> = urls.iter().cloned().map(Some).collect();

    let probes = urls.into_iter().enumerate().map(|(index, url)| {
        let client = client.clone();
        async move {
            let outcome = probe_single_link(&client, &url, settings).await;
            (index, ProbeResult { url, outcome })
        }
    });

    let mut in_flight = stream::iter(probes).buffer_unordered(settings.max_concurrency.max(1));
    let mut results = Vec::with_capacity(pending.len());

    loop {
        match timeout_at(deadline, in_flight.next()).await {
            Ok(Some((index, result))) => {
                pending[index] = None;
                results.push(result);
            }
            Ok(None) => break,
            Err(_) => {
                warn!(
                    "Probe deadline of {:?} reached, abandoning {} link(s)",
                    settings.deadline,
                    pending.iter().flatten().count()
                );
                break;
            }
        }
    }

    // Dropping the stream cancels the probes still running
    drop(in_flight);

    results.extend(pending.into_iter().flatten().map(|url| ProbeResult {
        url,
        outcome: ProbeOutcome::Abandoned,
    }));

    results
}

// Probes a single link
//
// We only look at the status line; the body is never read.
async fn probe_single_link(client: &Client, url: &str, settings: &ProbeSettings) -> ProbeOutcome {
    let result = client
        .get(url)
        .header(USER_AGENT, settings.user_agent.as_str())
        .timeout(settings.timeout)
        .send()
        .await;

    match result {
        Ok(response) => {
            let status = response.status().as_u16();
            debug!("Probe {} -> HTTP {}", url, status);
            ProbeOutcome::Responded { status }
        }
        Err(e) => {
            let reason = describe_error(&e);
            warn!("Probe {} failed: {}", url, reason);
            ProbeOutcome::Failed { reason }
        }
    }
}

// Categorizes reqwest errors into a short human-readable reason
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_builder() {
        "Invalid URL".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        let error_string = error.to_string();
        if error_string.contains("dns") {
            "Could not resolve hostname".to_string()
        } else {
            "Connection failed".to_string()
        }
    } else {
        error.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why track `pending` by index?
//    - buffer_unordered yields results in whatever order they finish
//    - Carrying the index along lets us tick each URL off in O(1)
//    - Whatever is still Some(..) at the end never finished
//
// 2. How does the deadline cancel probes?
//    - timeout_at gives up waiting at a fixed instant
//    - The probes themselves are futures owned by the stream
//    - When the stream is dropped, those futures are dropped, and a dropped
//      future simply stops running (its HTTP request is aborted)
//
// 3. Why not count abandoned probes as broken?
//    - We don't know; the link might be fine but slow
//    - Counting them as not broken keeps the broken count a lower bound that
//      never exceeds the number of external links
// -----------------------------------------------------------------------------
