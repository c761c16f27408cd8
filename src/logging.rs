//! Tracing subscriber setup for hosts and the CLI.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "printzone=info";

/// Install a fmt subscriber writing to stderr, filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already installed.
pub fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

/// Like [`try_init`], ignoring an already-installed subscriber.
pub fn init() {
    let _ = try_init();
}
