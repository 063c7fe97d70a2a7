//! Structured logging initialisation
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! JSON (production) or pretty (development) formatter. Output goes to stderr
//! so command output on stdout stays machine-readable.
//!
//! ## Environment Variables
//!
//! - `TRACKROUTE_LOG_LEVEL` - trace/debug/info/warn/error (default: `info`)
//! - `TRACKROUTE_LOG_FORMAT` - json/pretty (default: `json`)
//! - `TRACKROUTE_LOG_FILTER` - extra comma-separated filter directives,
//!   e.g. `trackroute::router=debug`
//! - `RUST_LOG` - when set, replaces the level entirely

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Extra filter directives (comma-separated)
    pub target_filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Json,
            target_filter: None,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("TRACKROUTE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(
                &env::var("TRACKROUTE_LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
            ),
            target_filter: env::var("TRACKROUTE_LOG_FILTER")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }

    /// The configured level, falling back to `INFO` for unknown values
    #[must_use]
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Build the filter: `RUST_LOG` if set, otherwise the level plus any extra directives.
    ///
    /// # Errors
    ///
    /// Returns an error if a directive in `target_filter` does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let mut env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            let directives = target_filter.split(',').map(str::trim);
            for directive in directives.filter(|d| !d.is_empty()) {
                let directive = directive
                    .parse::<Directive>()
                    .with_context(|| format!("Invalid log filter directive: {directive}"))?;
                env_filter = env_filter.add_directive(directive);
            }
        }
        Ok(env_filter)
    }
}

/// Initialize logging with the given configuration
///
/// # Errors
///
/// Returns an error if a filter directive is invalid or a global subscriber
/// has already been installed.
///
/// # Example
///
/// ```no_run
/// use trackroute::logging::{init_logging_with_config, LogConfig};
///
/// init_logging_with_config(&LogConfig::from_env())
///     .expect("Failed to initialize logging");
/// ```
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install JSON log subscriber")?,
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install pretty log subscriber")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Json);
    }

    #[test]
    fn test_level_fallback() {
        let mut config = LogConfig::default();
        assert_eq!(config.level(), Level::INFO);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.level(), Level::DEBUG);
        config.log_level = "verbose".to_string();
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_invalid_directive_is_reported() {
        let config = LogConfig {
            target_filter: Some("trackroute=notalevel".to_string()),
            ..LogConfig::default()
        };
        assert!(config.env_filter().is_err());
    }

    #[test]
    fn test_valid_directives_accepted() {
        let config = LogConfig {
            target_filter: Some("trackroute::router=debug, ,trackroute=warn".to_string()),
            ..LogConfig::default()
        };
        assert!(config.env_filter().is_ok());
    }
}
