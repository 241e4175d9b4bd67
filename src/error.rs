// src/error.rs
// =============================================================================
// Errors that can end an analysis.
//
// Only fatal conditions live here. A single external link that cannot be
// probed is NOT an error of the whole analysis: the prober records it as a
// failed probe and counts the link as broken (see links/probe.rs). A page
// without a usable <title> is not an error either, it just has an empty title.
//
// Rust concepts:
// - thiserror: derive std::error::Error + Display from attributes
// - #[source]: keeps the underlying reqwest error in the error chain
// =============================================================================

use thiserror::Error;

/// Everything that can make `analyze` fail without producing a result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The page address is malformed or not an http(s) URL.
    #[error("invalid page address '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page could not be retrieved at all (DNS, connect, timeout, body read).
    #[error("could not connect to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page answered, but not with 200 OK.
    #[error("response status from {url}: {status} (expected 200)")]
    UnexpectedStatus { url: String, status: u16 },

    /// The body could not be decoded into text for the tree builder.
    #[error("could not parse HTML body of {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The shared HTTP client could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Coarse classification of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Parse,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidUrl { .. } | AnalysisError::Client(_) => ErrorKind::Configuration,
            AnalysisError::Transport { .. } | AnalysisError::UnexpectedStatus { .. } => {
                ErrorKind::Transport
            }
            AnalysisError::Parse { .. } => ErrorKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
