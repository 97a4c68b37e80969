//! # Logging Setup
//!
//! Installs the `tracing` subscriber for binaries. Libraries never do.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a formatted subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug`
/// for the fairisle crates when `verbose` is on.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info,fairisle=debug,fairisle_procedural=debug")
        } else {
            EnvFilter::new("info")
        }
    });

    // a second install (tests) is not an error worth reporting
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
