//! Tracing setup for the binary
//!
//! Logs go to stderr; stdout is reserved for CSV output.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to this
/// crate (e.g. `"info"`, `"debug"`).
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("rust_banking_ledger={default_level}")));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
