//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber.
///
/// The `RUST_LOG` environment variable wins when set; otherwise the given
/// default directive (e.g. `"info"`) applies.
pub fn init_tracing(default_directive: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
