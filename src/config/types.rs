//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MODEL_PATH, DEFAULT_PORT, DEFAULT_SCALER_PATH, WHOIS_LOOKUP_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Doubles as the CLI surface of the binary; the library constructs it
/// programmatically via [`Default`].
///
/// # Examples
///
/// ```no_run
/// use url_verdict::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     scaler_path: PathBuf::from("artifacts/scaler.json"),
///     port: 9000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "url_verdict",
    about = "Classifies URLs as Safe or Phishing and serves WHOIS registration lookups"
)]
pub struct Config {
    /// Path to the pre-fit feature scaler artifact (JSON)
    #[arg(long, default_value = DEFAULT_SCALER_PATH)]
    pub scaler_path: PathBuf,

    /// Path to the pre-fit clustering model artifact (JSON)
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// HTTP listen port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-request WHOIS lookup timeout in seconds (classification path)
    #[arg(long, default_value_t = WHOIS_LOOKUP_TIMEOUT.as_secs())]
    pub whois_timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from(DEFAULT_SCALER_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            port: DEFAULT_PORT,
            whois_timeout_seconds: WHOIS_LOOKUP_TIMEOUT.as_secs(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.whois_timeout_seconds, 5);
        assert_eq!(config.scaler_path, PathBuf::from("artifacts/scaler.json"));
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.json"));
    }

    #[test]
    fn test_config_parses_defaults_from_empty_args() {
        let config = Config::parse_from(["url_verdict"]);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_config_parses_overrides() {
        let config = Config::parse_from([
            "url_verdict",
            "--port",
            "9000",
            "--scaler-path",
            "/tmp/s.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.scaler_path, PathBuf::from("/tmp/s.json"));
    }
}
