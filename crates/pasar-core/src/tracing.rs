use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global JSON subscriber, filtered by `RUST_LOG`.
///
/// Call at startup; repeated calls are no-ops rather than panics, which
/// keeps test binaries that share a process safe.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
