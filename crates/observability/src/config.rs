use std::str::FromStr;

use anyhow::{Context, bail};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON lines with timestamps.
    #[default]
    Json,
    /// Multi-line human-readable output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => bail!("unsupported log format {other:?} (expected \"json\" or \"pretty\")"),
        }
    }
}

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info` or `scaffold_core=debug,warn`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub const FILTER_VAR: &'static str = "RUST_LOG";
    pub const FORMAT_VAR: &'static str = "SCAFFOLD_LOG_FORMAT";

    /// Read `RUST_LOG` and `SCAFFOLD_LOG_FORMAT`; unset variables keep their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(filter) = lookup(Self::FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(Self::FORMAT_VAR) {
            config.format = format
                .parse::<LogFormat>()
                .with_context(|| format!("invalid {}", Self::FORMAT_VAR))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = TracingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = TracingConfig::from_lookup(lookup(&[
            ("RUST_LOG", "scaffold_core=debug"),
            ("SCAFFOLD_LOG_FORMAT", " Pretty "),
        ]))
        .unwrap();

        assert_eq!(config.filter, "scaffold_core=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config = TracingConfig::from_lookup(lookup(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn rejects_unknown_format() {
        let err = TracingConfig::from_lookup(lookup(&[("SCAFFOLD_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid SCAFFOLD_LOG_FORMAT");
        assert!(format!("{err:#}").contains("unsupported log format \"xml\""));
    }
}
