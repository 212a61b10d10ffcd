//! Tracing/logging setup shared by processes embedding the domain crates.

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops. An invalid
/// configuration falls back to the defaults and is reported once tracing is up.
pub fn init() {
    match config::TracingConfig::from_env() {
        Ok(config) => {
            if let Err(e) = tracing::init_with(&config) {
                let _ = tracing::init_with(&config::TracingConfig::default());
                ::tracing::warn!(error = %e, "invalid tracing filter; using defaults");
            }
        }
        Err(e) => {
            let _ = tracing::init_with(&config::TracingConfig::default());
            ::tracing::warn!(error = %e, "invalid tracing configuration; using defaults");
        }
    }
}

/// Environment-driven configuration.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, TracingConfig};
