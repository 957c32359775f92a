//! Logging init: line-oriented diagnostics on stderr.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr (no ANSI, honors `RUST_LOG`).
///
/// Per-image progress and failures stay on the standard streams; there is no
/// log file and no machine-readable report.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,darkgrab=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
