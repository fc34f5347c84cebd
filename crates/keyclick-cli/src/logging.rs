//! Diagnostic logging setup.
//!
//! Progress meant for people goes to stdout via `colored`; `tracing` events
//! from the engine go to stderr so `--json` output stays parseable.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--verbose` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the event filter. `--verbose` forces `debug`.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
