//! Tracing initialization

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// The filter defaults to `info` and can be overridden through `RUST_LOG`.
/// Call once at startup; a second call panics because the global
/// subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
