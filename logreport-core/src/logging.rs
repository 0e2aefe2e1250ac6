use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr, filtered by `RUST_LOG` (defaults to "info").
///
/// Stdout is left for the command's own output:
/// - terminal: compact human readable lines
/// - otherwise: JSON with flattened event fields, for log shippers
pub fn init_logging() {
    match default_log_format() {
        LogFormat::Pretty => init_pretty_logging(),
        LogFormat::Json => init_json_logging(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

fn init_pretty_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .compact()
        .with_target(false)
        .init();
}

fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}
