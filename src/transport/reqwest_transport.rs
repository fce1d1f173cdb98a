//! `reqwest`-backed transport.

use std::collections::HashMap;

use log::debug;

use super::{HttpTransport, Route};
use crate::error_handling::{categorize_reqwest_error, InitializationError, TransportError};
use crate::initialization::{init_direct_client, init_node_client};

/// Transport holding one direct client plus one proxied client per known node.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    direct: reqwest::Client,
    nodes: HashMap<String, reqwest::Client>,
}

impl ReqwestTransport {
    /// Creates a transport that can only route directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the direct client cannot be built.
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self {
            direct: init_direct_client()?,
            nodes: HashMap::new(),
        })
    }

    /// Registers a node reachable through `proxy_url`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ProxyUrlError` if the proxy URL is rejected.
    pub fn with_node(mut self, name: &str, proxy_url: &str) -> Result<Self, InitializationError> {
        let client = init_node_client(name, proxy_url)?;
        self.nodes.insert(name.to_string(), client);
        Ok(self)
    }

    fn client_for(&self, route: &Route) -> Result<&reqwest::Client, TransportError> {
        match route {
            Route::Direct => Ok(&self.direct),
            Route::Node(name) => self
                .nodes
                .get(name)
                .ok_or_else(|| TransportError::UnknownRoute(name.clone())),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, route: &Route) -> Result<String, TransportError> {
        let client = self.client_for(route)?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} via {} returned {}", url, route, status);
        }

        response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e))
    }
}
