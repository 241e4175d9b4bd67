// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every tuning flag maps onto a field of AnalyzerConfig; anything left out
// keeps the library default.
// =============================================================================

use clap::{Parser, ValueEnum};
use page_analyzer::config::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_CONCURRENCY, DEFAULT_PROBE_DEADLINE, DEFAULT_PROBE_TIMEOUT,
    DEFAULT_PROBE_USER_AGENT,
};
use page_analyzer::AnalyzerConfig;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "page-analyzer",
    version,
    about = "Summarise the structure of a web page",
    long_about = "page-analyzer fetches a single web page and reports its HTML version, title, \
                  heading counts, internal/external links, broken external links and whether \
                  it contains a login form."
)]
pub struct Cli {
    /// Page URL to analyse (e.g., https://example.com)
    pub url: String,

    /// Output the report in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Seconds to wait for the page itself
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Seconds to wait for each external link probe
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
    pub probe_timeout: u64,

    /// Seconds after which unfinished probes are abandoned
    #[arg(long, default_value_t = DEFAULT_PROBE_DEADLINE.as_secs())]
    pub deadline: u64,

    /// Maximum number of probes in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub concurrency: usize,

    /// User-Agent sent with link probes
    #[arg(long, default_value = DEFAULT_PROBE_USER_AGENT)]
    pub user_agent: String,

    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default()
            .with_fetch_timeout(Duration::from_secs(self.timeout))
            .with_probe_timeout(Duration::from_secs(self.probe_timeout))
            .with_probe_deadline(Duration::from_secs(self.deadline))
            .with_max_concurrency(self.concurrency)
            .with_probe_user_agent(self.user_agent.clone())
    }
}
