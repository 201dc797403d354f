//! Miscellaneous binary startup helpers.

/// Initializes a tracing subscriber for logging, filtered via `RUST_LOG`.
pub fn subscriber() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
