//! Structured logging setup
//!
//! Logs go to **stderr** through `tracing-subscriber`, keeping stdout reserved for
//! diagnostics and the final report that CI jobs parse.
//!
//! ## Environment Variables
//!
//! - `OPENAPI_CHECK_LOG_LEVEL` - trace/debug/info/warn/error (default: `warn`)
//! - `OPENAPI_CHECK_LOG_FORMAT` - compact/pretty/json (default: `compact`)
//! - `OPENAPI_CHECK_LOG_TARGET_FILTER` - extra comma-separated filter directives
//! - `OPENAPI_CHECK_LOG_INCLUDE_LOCATION` - include file:line in records (default: `false`)
//!
//! `RUST_LOG`, when set, takes precedence over `OPENAPI_CHECK_LOG_LEVEL`.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log record format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Additional filter directives (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Compact,
            target_filter: None,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("OPENAPI_CHECK_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: lookup("OPENAPI_CHECK_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            target_filter: lookup("OPENAPI_CHECK_LOG_TARGET_FILTER"),
            include_location: lookup("OPENAPI_CHECK_LOG_INCLUDE_LOCATION")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let mut env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    if let Some(target_filter) = &config.target_filter {
        for filter in target_filter.split(',') {
            let filter = filter.trim();
            if filter.is_empty() {
                continue;
            }
            match filter.parse() {
                Ok(directive) => env_filter = env_filter.add_directive(directive),
                Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
            }
        }
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    let fmt_layer = match config.format {
        LogFormat::Compact => fmt_layer.compact().boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
        LogFormat::Json => fmt_layer.json().with_current_span(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("bogus"), LogFormat::Compact);
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level(), Level::WARN);
    }

    #[test]
    fn test_from_lookup() {
        let vars = HashMap::from([
            ("OPENAPI_CHECK_LOG_LEVEL", "debug"),
            ("OPENAPI_CHECK_LOG_FORMAT", "json"),
            ("OPENAPI_CHECK_LOG_TARGET_FILTER", "openapi_check=trace"),
            ("OPENAPI_CHECK_LOG_INCLUDE_LOCATION", "true"),
        ]);
        let config = LogConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.target_filter.as_deref(), Some("openapi_check=trace"));
        assert!(config.include_location);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = LogConfig::from_lookup(|key| match key {
            "OPENAPI_CHECK_LOG_LEVEL" => Some("loud".to_string()),
            "OPENAPI_CHECK_LOG_INCLUDE_LOCATION" => Some("yes".to_string()),
            _ => None,
        });
        assert_eq!(config.level(), Level::WARN);
        assert!(!config.include_location);
    }
}
