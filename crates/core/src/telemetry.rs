//! Tracing bootstrap for hosts embedding the report pipeline.
//!
//! The library only emits events; installing a subscriber is the host's call.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once: later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}
