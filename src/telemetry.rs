//! Opt-in tracing bootstrap for hosts that do not bring their own
//! subscriber.
//!
//! Synchronization and filter decisions are logged through `tracing` at
//! `debug`/`warn` level; nothing is emitted unless a subscriber is
//! installed. Hosts with their own telemetry stack should skip this module
//! and install their subscriber directly.

/// Installs a compact formatting subscriber honoring `RUST_LOG`.
///
/// Without `RUST_LOG` the filter defaults to `info` globally and `debug`
/// for this crate, which surfaces sync propagation without drowning the
/// host's own logs. Returns `false` when the `telemetry` feature is off or
/// a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,plotsync=debug"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
