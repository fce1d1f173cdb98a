//! Time-bounded geo lookups.
//!
//! Each lookup issues exactly one GET through an [`HttpTransport`] and wraps
//! it in its own timeout. When the timeout fires the in-flight request future
//! is dropped, which cancels that request and nothing else.

use std::time::Duration;

use log::{debug, warn};
use url::Url;

use super::extract::{parse_entry_body, parse_landing_body};
use super::types::LookupOutcome;
use crate::config::{ENTRY_LOOKUP_URL, LANDING_LOOKUP_URL};
use crate::error_handling::LookupFailure;
use crate::transport::{HttpTransport, Route};

/// The geo metadata services this crate knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoService {
    /// General IP-info endpoint; reports the caller's apparent egress address.
    IpInfo,
    /// ISP/speed-test style endpoint keyed by the IP to describe.
    SpeedTest,
}

impl GeoService {
    /// Request URL for this service. `key` is ignored by [`GeoService::IpInfo`].
    pub fn url(&self, key: &str) -> String {
        match self {
            GeoService::IpInfo => LANDING_LOOKUP_URL.to_string(),
            GeoService::SpeedTest => match Url::parse_with_params(ENTRY_LOOKUP_URL, &[("ip", key)]) {
                Ok(url) => url.to_string(),
                Err(_) => format!("{ENTRY_LOOKUP_URL}?ip={key}"),
            },
        }
    }

    fn parse(&self, body: &str, key: &str) -> super::GeoRecord {
        match self {
            GeoService::IpInfo => parse_landing_body(body),
            GeoService::SpeedTest => parse_entry_body(body, key),
        }
    }
}

/// Queries `service` for `key` over `route`, bounded by `timeout`.
///
/// - Timeout → `Failure(connection timeout)`
/// - Transport error → `Failure(request failed)`, or `connection timeout` if
///   the transport itself reported a timeout
/// - Any body, including malformed JSON → `Success` with whatever fields parsed
///
/// Never panics and never returns an error to the caller.
pub async fn lookup<T: HttpTransport>(
    transport: &T,
    service: GeoService,
    key: &str,
    route: &Route,
    timeout: Duration,
) -> LookupOutcome {
    let url = service.url(key);
    debug!("Looking up {} via {}", url, route);

    let body = match tokio::time::timeout(timeout, transport.get(&url, route)).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            warn!("Lookup {} via {} failed: {}", url, route, e);
            return LookupOutcome::failure(LookupFailure::from(&e));
        }
        Err(_) => {
            warn!("Lookup {} via {} timed out after {:?}", url, route, timeout);
            return LookupOutcome::failure(LookupFailure::Timeout);
        }
    };

    let record = service.parse(&body, key);
    if record.usable_ip().is_none() {
        debug!("Lookup {} via {} returned no usable IP", url, route);
    }
    LookupOutcome::Success(record)
}
