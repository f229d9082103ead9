//! Logging setup for binaries. Libraries only emit `tracing` events.

use tracing_subscriber::EnvFilter;

/// Send `tracing` events to stderr, filtered by `RUST_LOG` or else by `fallback`.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
