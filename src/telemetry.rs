//! Telemetry helpers for applications embedding `frame-highcharts`.
//!
//! Serialization only emits `tracing` events; wiring a subscriber is left to
//! the host unless it opts into `init_default_tracing`.

/// Filter used when `RUST_LOG` is unset: warnings from everything, pipeline
/// summaries from this crate.
pub const DEFAULT_FILTER: &str = "warn,frame_highcharts=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host has
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
