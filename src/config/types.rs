//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_URL;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
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
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Running without any arguments fetches [`DEFAULT_URL`] with a plain client
/// (no timeout, reqwest's own User-Agent).
///
/// # Examples
///
/// ```bash
/// # Demo page
/// page_metadata
///
/// # Any page, with a timeout and debug logging
/// page_metadata https://example.com --timeout-seconds 10 --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "page_metadata",
    about = "Fetches a web page and prints its title, image, description, date and favicon as JSON."
)]
pub struct Config {
    /// Page to fetch
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value (reqwest default when omitted)
    ///
    /// `page_metadata::config::DEFAULT_USER_AGENT` holds a Chrome-like string
    /// for sites that reject non-browser clients.
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: None,
            user_agent: None,
        }
    }
}
