//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used for
//! direct lookups and for lookups routed through a node.

use std::time::Duration;

use reqwest::{ClientBuilder, Proxy};

use crate::config::{DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

fn base_builder() -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(DEFAULT_USER_AGENT)
}

/// Initializes the HTTP client for direct (non-proxied) requests.
///
/// System proxy settings are ignored so "direct" really means direct.
/// No overall request timeout is set here; each lookup applies its own bound.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_direct_client() -> Result<reqwest::Client, InitializationError> {
    let client = base_builder().no_proxy().build()?;
    Ok(client)
}

/// Initializes an HTTP client whose traffic is routed through a node.
///
/// # Arguments
///
/// * `node` - Node name (used in error messages)
/// * `proxy_url` - Proxy endpoint exposing the node (http, https, socks5, socks5h)
///
/// # Errors
///
/// Returns `InitializationError::ProxyUrlError` if the proxy URL is rejected,
/// or `InitializationError::HttpClientError` if client creation fails.
pub fn init_node_client(
    node: &str,
    proxy_url: &str,
) -> Result<reqwest::Client, InitializationError> {
    let proxy = Proxy::all(proxy_url).map_err(|e| InitializationError::ProxyUrlError {
        node: node.to_string(),
        reason: e.to_string(),
    })?;
    let client = base_builder().proxy(proxy).build()?;
    Ok(client)
}
