//! Logging setup for the command-line host.
//!
//! Diagnostics go to stderr so that stdout stays clean for piping.
//! The level is controlled by `RUST_LOG` (default `warn`), or raised to
//! `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Call once from `main`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
