//! Tracing/logging initialization shared across the workspace.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
