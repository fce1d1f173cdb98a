//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and transport
//! - The user-visible lookup failure taxonomy
//! - Error categorization for `reqwest` errors
//!
//! Only transport faults (timeouts, request failures) become user-visible
//! errors. Malformed or incomplete responses degrade silently.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, LookupFailure, TransportError};
