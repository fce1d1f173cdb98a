//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::argument::parse_mask_argument;
use crate::config::constants::{DNS_TIMEOUT, LOOKUP_TIMEOUT};

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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Rendering applied to the assembled report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Centered HTML paragraph for hosts that display rich messages
    Html,
    /// Plain lines for terminals
    Text,
    /// Serialized report for programmatic consumers
    Json,
}

/// Command-line options.
///
/// Describes the selected node, how to route traffic through it, and the
/// free-form masking argument supplied by the host.
///
/// # Examples
///
/// ```bash
/// # Query a node reachable through a local SOCKS listener
/// node_ipinfo --node-name "HK 01" --node-address hk1.example.net \
///     --proxy socks5h://127.0.0.1:1080
///
/// # Mask trailing address groups, plain text output
/// node_ipinfo --node-name "JP" --node-address 203.0.113.7 \
///     --proxy http://127.0.0.1:7890 --argument "[true]" --format text
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "node_ipinfo",
    about = "Shows entry and landing location details for a proxy node."
)]
pub struct Opt {
    /// Display name of the selected node
    #[arg(long)]
    pub node_name: String,

    /// Configured address of the node (hostname or literal IP)
    #[arg(long)]
    pub node_address: String,

    /// Proxy URL that routes traffic through the node (http, https, socks5, socks5h)
    #[arg(long)]
    pub proxy: String,

    /// Host-supplied argument text, e.g. "[true]" or "mask=false"
    #[arg(long)]
    pub argument: Option<String>,

    /// Report format: html|text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use node_ipinfo::Config;
///
/// let config = Config {
///     mask: true,
///     ..Default::default()
/// };
/// assert_eq!(config.lookup_timeout.as_secs(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Redact the trailing group of displayed addresses
    pub mask: bool,

    /// Timeout applied to each geo lookup independently
    pub lookup_timeout: Duration,

    /// Timeout applied to DNS-over-HTTP resolution
    pub resolve_timeout: Duration,

    /// Report rendering
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mask: false,
            lookup_timeout: LOOKUP_TIMEOUT,
            resolve_timeout: DNS_TIMEOUT,
            output_format: OutputFormat::Html,
        }
    }
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            mask: parse_mask_argument(opt.argument.as_deref()),
            output_format: opt.format,
            ..Default::default()
        }
    }
}
