//! Tracing subscriber setup for binaries and tests.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a formatting subscriber filtered by `RUST_LOG` (default `info`).
///
/// ```no_run
/// employee_directory::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Installs a `debug` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
