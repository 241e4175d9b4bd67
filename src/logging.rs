// src/logging.rs
// =============================================================================
// Logger setup for the CLI.
//
// The library only talks to the `log` facade; this is where the binary picks
// env_logger as the backend. Logs go to stderr so --json output on stdout can
// be piped straight into other tools.
// =============================================================================

use log::{LevelFilter, SetLoggerError};

// Initializes env_logger
//
// RUST_LOG is read first (so per-module filters like
// `RUST_LOG=page_analyzer=trace` still work), then the --log-level flag
// sets the overall level. Chatty dependencies are capped.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder
        .filter_level(level)
        .filter_module("html5ever", LevelFilter::Error)
        .filter_module("selectors", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Info.min(level))
        .filter_module("reqwest", LevelFilter::Info.min(level))
        .filter_module("page_analyzer", level)
        .target(env_logger::Target::Stderr);

    // try_init so tests that initialise twice don't panic
    builder.try_init()
}
