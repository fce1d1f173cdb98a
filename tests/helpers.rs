// Shared test helpers: a scripted HTTP transport.
//
// Replies are matched on URL prefix and route, so tests can script the
// resolver, the entry service, and the landing service independently.

#![allow(dead_code)] // Not every test file uses every helper

use std::sync::Mutex;
use std::time::Duration;

use node_ipinfo::{HttpTransport, Route, TransportError};

pub const RESOLVE_PREFIX: &str = "http://223.5.5.5/resolve";
pub const ENTRY_PREFIX: &str = "http://api-v3.speedtest.cn/ip";
pub const LANDING_URL: &str = "http://ipinfo.io/json";

#[derive(Clone)]
struct Reply {
    url_prefix: String,
    route: Route,
    delay: Duration,
    result: Result<String, TransportError>,
}

/// Transport that answers from a script and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Vec<Reply>,
    calls: Mutex<Vec<(String, Route)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, url_prefix: &str, route: Route, body: &str) -> Self {
        self.on_delayed(url_prefix, route, Duration::ZERO, body)
    }

    pub fn on_delayed(mut self, url_prefix: &str, route: Route, delay: Duration, body: &str) -> Self {
        self.replies.push(Reply {
            url_prefix: url_prefix.to_string(),
            route,
            delay,
            result: Ok(body.to_string()),
        });
        self
    }

    pub fn on_error(mut self, url_prefix: &str, route: Route, error: TransportError) -> Self {
        self.replies.push(Reply {
            url_prefix: url_prefix.to_string(),
            route,
            delay: Duration::ZERO,
            result: Err(error),
        });
        self
    }

    pub fn calls(&self) -> Vec<(String, Route)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|(url, _)| url)
            .filter(|url| url.starts_with(prefix))
            .collect()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str, route: &Route) -> Result<String, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), route.clone()));

        let reply = self
            .replies
            .iter()
            .find(|r| url.starts_with(&r.url_prefix) && &r.route == route)
            .cloned();

        match reply {
            Some(reply) => {
                tokio::time::sleep(reply.delay).await;
                reply.result
            }
            None => Err(TransportError::Request(format!("unscripted request {url}"))),
        }
    }
}

pub fn node_route(name: &str) -> Route {
    Route::Node(name.to_string())
}

pub const LANDING_JP: &str = r#"{"ip":"203.0.113.7","city":"Tokyo","region":"Tokyo","country":"JP","org":"AS2516 KDDI CORPORATION"}"#;

pub const ENTRY_SZ: &str = r#"{"code":0,"data":{"ip":"198.51.100.23","countryCode":"CN","province":"广东","city":"深圳","isp":"电信"}}"#;
