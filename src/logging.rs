//! Installs a `tracing` subscriber for hosts that do not bring their own.
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "formula_checker_core=info";

/// Formats events to stderr, filtered by `RUST_LOG`. Returns `false` if a
/// global subscriber was already installed; calling it twice is harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
