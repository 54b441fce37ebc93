//! Telemetry helpers for applications embedding `chart-walk`.
//!
//! Walkers only emit `tracing` events (`debug` per walk, `trace` per
//! crossing). Installing a subscriber is left to the host; the helpers here
//! exist for tools and tests that just want the events printed.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter("info")
}

/// Same as [`init_default_tracing`], with a caller-chosen fallback directive
/// (for example `"chart_walk=trace"`) used when `RUST_LOG` is unset or invalid.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
