//! HTTP transport and per-request routing.
//!
//! Lookups never talk to `reqwest` directly. They go through [`HttpTransport`],
//! which takes a [`Route`] deciding whether the request leaves the host
//! directly or through the selected node. [`ReqwestTransport`] is the
//! production implementation; tests substitute scripted transports.

mod reqwest_transport;

use std::fmt;
use std::future::Future;

use crate::error_handling::TransportError;

pub use reqwest_transport::ReqwestTransport;

/// How a request reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Straight from the host.
    Direct,
    /// Through the named node.
    Node(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Direct => f.write_str("DIRECT"),
            Route::Node(name) => write!(f, "node {name}"),
        }
    }
}

/// Issues a single HTTP GET and returns the response body.
///
/// The body is returned for any HTTP status; only network-level problems are
/// errors. Implementations must be cancel-safe: dropping the returned future
/// abandons the request.
pub trait HttpTransport: Send + Sync {
    fn get(
        &self,
        url: &str,
        route: &Route,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}
