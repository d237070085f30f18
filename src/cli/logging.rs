//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose`
/// and `warn` without, so stdout carries only the game itself.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second install (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
