//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! `export csv -`. Verbosity comes from `RUST_LOG`, defaulting to warnings.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "depenses=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls do nothing
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // another subscriber may already be installed by an embedding host
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
