//! Shared helpers for integration tests.

use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; later calls are no-ops.
///
/// Set `RUST_LOG=testkit=trace` to see every recorded call.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
