//! Tracing subscriber setup for the command-line tool

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Log filter for a verbosity level
///
/// `quiet` keeps warnings only; each `verbose` step raises the level by one.
pub fn filter_directive(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "sirds=warn",
        (false, 0) => DEFAULT_LOG_FILTER,
        (false, 1) => "sirds=debug",
        (false, _) => "sirds=trace",
    }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence when set
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(quiet: bool, verbose: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .is_ok()
}
