use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber, reading the log filter
/// from the `RUST_LOG` environment variable.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}
