//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "ferrodrop=debug,ferrodrop_core=info";

/// Install a fmt subscriber honouring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Install a fmt subscriber with an explicit filter directive.
pub fn init_with_filter(directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .try_init();
}

/// Install a subscriber that writes through the test harness capture.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("ferrodrop=trace"))
        .with_test_writer()
        .try_init();
}
