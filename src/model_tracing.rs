//! Subscriber setup for tests and demos.
//!
//! The library only emits `tracing` events. Hosts that want to see them
//! install their own subscriber, or call `init` with the `model_tracing`
//! feature enabled.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `off`).
/// Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(true).with_test_writer())
            .try_init();
    });
}
