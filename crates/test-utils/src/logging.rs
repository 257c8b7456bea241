//! Opt-in log output for tests and benchmarks.

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Output is off unless `RUST_LOG` is set. Safe to call from every test:
/// only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}
