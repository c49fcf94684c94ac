//! Opt-in tracing bootstrap for hosts embedding `isotype-charts`.
//!
//! The library only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts either call one of the helpers below or wire their own
//! subscriber and filters.

/// Filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "isotype_charts=info";

/// Installs a compact `tracing` subscriber using [`DEFAULT_FILTER_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER_DIRECTIVE)
}

/// Installs a compact `tracing` subscriber.
///
/// `RUST_LOG` wins over `fallback_directive` when present and parseable.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
