//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TracingConfig};

/// Install the global subscriber described by `config`.
///
/// Fails only on an invalid filter. Safe to call multiple times (subsequent
/// installs are no-ops).
pub fn init_with(config: &TracingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A subscriber may already be installed (tests, embedding apps).
    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_with(&TracingConfig::default()).unwrap();
        init_with(&TracingConfig {
            filter: "debug".into(),
            format: LogFormat::Pretty,
        })
        .unwrap();
        crate::init();
    }

    #[test]
    fn invalid_filter_is_an_error() {
        let config = TracingConfig {
            filter: "scaffold_core=notalevel".into(),
            format: LogFormat::Json,
        };
        assert!(init_with(&config).is_err());
    }
}
