//! Diagnostic logging to stderr
//!
//! Logs never go to stdout, which carries only the report.

use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "binowner=debug";

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. `--verbose` takes precedence over `RUST_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
