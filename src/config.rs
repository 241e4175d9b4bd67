// src/config.rs
// =============================================================================
// Tunables for one analysis: timeouts, the probe worker limit and the
// identification header sent with reachability probes.
//
// Defaults come from the constants below; the CLI overrides them from flags.
// =============================================================================

use std::time::Duration;

/// Timeout for retrieving the page under analysis.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for a single reachability probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on the time spent probing all external links of a page.
pub const DEFAULT_PROBE_DEADLINE: Duration = Duration::from_secs(30);

/// Probes in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Browser-like identification so probed hosts don't reject us as a bot.
pub const DEFAULT_PROBE_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub fetch_timeout: Duration,
    pub probe_timeout: Duration,
    pub probe_deadline: Duration,
    pub max_concurrency: usize,
    pub probe_user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            probe_deadline: DEFAULT_PROBE_DEADLINE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            probe_user_agent: DEFAULT_PROBE_USER_AGENT.to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_probe_deadline(mut self, deadline: Duration) -> Self {
        self.probe_deadline = deadline;
        self
    }

    /// Zero would stall the probe stream, so it is raised to one.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_probe_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.probe_user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert!(config.probe_user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = AnalyzerConfig::default().with_max_concurrency(0);
        assert_eq!(config.max_concurrency, 1);
    }
}
