//! Configuration constants.
//!
//! This module defines the fixed endpoints, timeouts, and display labels used
//! throughout the application. Endpoints are not configurable at runtime.

use std::time::Duration;

// Network endpoints
/// Landing geo lookup, routed through the selected node.
pub const LANDING_LOOKUP_URL: &str = "http://ipinfo.io/json";
/// DNS-over-HTTP resolver used to turn a node hostname into an IPv4 address.
pub const DNS_RESOLVE_URL: &str = "http://223.5.5.5/resolve";
/// Entry geo/ISP lookup, routed directly.
pub const ENTRY_LOOKUP_URL: &str = "http://api-v3.speedtest.cn/ip";

// Network operation timeouts
/// Per-lookup timeout in seconds (applies to each path independently)
pub const LOOKUP_TIMEOUT_SECS: u64 = 5;
/// DNS-over-HTTP resolution timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(LOOKUP_TIMEOUT_SECS);
pub const DNS_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS);

/// Default User-Agent string for lookup requests.
pub const DEFAULT_USER_AGENT: &str = concat!("node_ipinfo/", env!("CARGO_PKG_VERSION"));

// Report labels
/// Title of the rendered report.
pub const REPORT_TITLE: &str = "IP Info Query";
/// Placeholder for any field the lookup did not provide.
pub const UNKNOWN: &str = "unknown";
/// Separator placed between collected error messages.
pub const ERROR_SEPARATOR: &str = " | ";

// Masking
/// Character used to redact the trailing group of an address.
pub const MASK_CHAR: char = '*';
/// Key recognised in `key=value` masking arguments.
pub const MASK_ARGUMENT_KEY: &str = "mask";
