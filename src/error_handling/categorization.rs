//! Error categorization.
//!
//! This module maps `reqwest` errors onto the transport error taxonomy.

use super::types::TransportError;

/// Categorizes a `reqwest::Error` into a `TransportError`.
///
/// Timeouts reported by reqwest itself (connect timeout) are kept distinct so
/// they surface the same way as the lookup's own time bound. Everything else
/// is a generic request failure carrying the error text for logs.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Request(format!("connect error: {error}"))
    } else if error.is_body() || error.is_decode() {
        TransportError::Request(format!("body error: {error}"))
    } else {
        TransportError::Request(error.to_string())
    }
}
