// File: crates/scenario-plot/src/logging.rs
// Summary: Stderr tracing subscriber; RUST_LOG wins over the verbosity flag.

use std::io;

use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
