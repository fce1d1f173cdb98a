//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, labels)
//! - CLI option types and parsing
//! - Tolerant parsing of the host-supplied masking argument

mod argument;
mod constants;
mod types;

// Re-export all constants
pub use argument::parse_mask_argument;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
