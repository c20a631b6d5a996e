//! Tracing initialization for binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; falls back to `default_filter` otherwise.
/// Intended to be called once at process startup by server/CLI binaries;
/// calling it twice panics, so library code must never call it.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
