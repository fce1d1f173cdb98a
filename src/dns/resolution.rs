//! Hostname resolution over DNS-over-HTTP.
//!
//! The node's hostname is resolved through a fixed public DNS-over-HTTP
//! endpoint in short-answer mode, which returns a bare JSON array of
//! addresses, e.g. `["203.0.113.7"]`.

use std::time::Duration;

use log::debug;
use url::Url;

use crate::address::{classify_address, AddressKind};
use crate::config::DNS_RESOLVE_URL;
use crate::transport::{HttpTransport, Route};

/// Builds the resolver query URL for `hostname`.
pub fn resolve_url(hostname: &str) -> String {
    match Url::parse_with_params(
        DNS_RESOLVE_URL,
        &[("name", hostname), ("type", "A"), ("short", "1")],
    ) {
        Ok(url) => url.to_string(),
        // The base URL is a constant, so this branch only guards against edits to it
        Err(_) => format!("{DNS_RESOLVE_URL}?name={hostname}&type=A&short=1"),
    }
}

/// Extracts the first IPv4 literal from a short-mode answer body.
///
/// Returns `None` for non-JSON bodies, non-array JSON, and empty answers.
pub fn parse_short_answer(body: &str) -> Option<String> {
    let answers: Vec<serde_json::Value> = serde_json::from_str(body).ok()?;
    answers
        .iter()
        .filter_map(|answer| answer.as_str())
        .find(|answer| classify_address(answer) == AddressKind::Ipv4)
        .map(str::to_string)
}

/// Resolves a hostname to an IPv4 address.
///
/// Resolution is best-effort: network errors, timeouts, malformed bodies and
/// empty answers all collapse to `None`, and the caller keeps using the
/// hostname itself as the lookup key.
///
/// # Arguments
///
/// * `transport` - Transport used for the direct request
/// * `hostname` - The hostname to resolve
/// * `timeout` - Upper bound for the whole request
pub async fn resolve_ipv4<T: HttpTransport>(
    transport: &T,
    hostname: &str,
    timeout: Duration,
) -> Option<String> {
    let url = resolve_url(hostname);
    let body = match tokio::time::timeout(timeout, transport.get(&url, &Route::Direct)).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            debug!("DNS-over-HTTP lookup for {} failed: {}", hostname, e);
            return None;
        }
        Err(_) => {
            debug!(
                "DNS-over-HTTP lookup for {} timed out after {:?}",
                hostname, timeout
            );
            return None;
        }
    };

    let ip = parse_short_answer(&body);
    match &ip {
        Some(ip) => debug!("Resolved {} to {}", hostname, ip),
        None => debug!("No A record in DNS-over-HTTP answer for {}", hostname),
    }
    ip
}
