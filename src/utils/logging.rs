//! Diagnostic logging setup
//!
//! Timers emit `tracing` events alongside their report line. Nothing is
//! printed for them unless a subscriber is installed, e.g. with [`init_logging`].

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a compact stderr subscriber once per process.
///
/// Honors `RUST_LOG`; falls back to `timed_scope=info`. Does nothing if this
/// function already ran or another global subscriber is in place.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("timed_scope=info"));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();
    });
}
