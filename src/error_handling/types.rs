//! Error type definitions.
//!
//! This module defines the initialization, transport, and lookup failure types
//! used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The proxy URL for a node could not be used.
    #[error("Invalid proxy URL for node {node}: {reason}")]
    ProxyUrlError {
        /// Node the proxy belongs to
        node: String,
        /// Why the URL was rejected
        reason: String,
    },
}

/// Errors produced by an [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The transport gave up waiting for the peer.
    #[error("request timed out")]
    Timeout,

    /// Network unreachable, connection refused, or a broken response.
    #[error("request failed: {0}")]
    Request(String),

    /// No client is registered for the requested node.
    #[error("no route to node {0}")]
    UnknownRoute(String),
}

/// User-visible reason a lookup path failed.
///
/// Only network faults are surfaced; malformed or incomplete responses
/// degrade to an empty record instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailure {
    /// The lookup exceeded its time bound.
    Timeout,
    /// The transport reported an error.
    RequestFailed,
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupFailure::Timeout => "connection timeout",
            LookupFailure::RequestFailed => "request failed",
        }
    }
}

impl From<&TransportError> for LookupFailure {
    fn from(error: &TransportError) -> Self {
        match error {
            TransportError::Timeout => LookupFailure::Timeout,
            TransportError::Request(_) | TransportError::UnknownRoute(_) => {
                LookupFailure::RequestFailed
            }
        }
    }
}
