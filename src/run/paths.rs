//! The entry and landing lookup paths.
//!
//! Each path produces exactly one [`LookupOutcome`] and never fails outright.

use log::debug;

use crate::address::classify_address;
use crate::config::Config;
use crate::dns::resolve_ipv4;
use crate::geoip::{lookup, GeoService, LookupOutcome};
use crate::transport::{HttpTransport, Route};

/// Picks the key for the entry lookup.
///
/// Literal IPs are used as-is. Hostnames are resolved to IPv4; when that
/// yields nothing the hostname itself becomes the key.
pub async fn entry_lookup_key<T: HttpTransport>(
    transport: &T,
    address: &str,
    config: &Config,
) -> String {
    let kind = classify_address(address);
    if kind.is_literal_ip() {
        return address.to_string();
    }

    match resolve_ipv4(transport, address, config.resolve_timeout).await {
        Some(ip) => ip,
        None => {
            debug!("Falling back to hostname {} as entry lookup key", address);
            address.to_string()
        }
    }
}

/// Entry path: resolve the node address if needed, then query the entry
/// service directly.
pub async fn lookup_entry<T: HttpTransport>(
    transport: &T,
    address: &str,
    config: &Config,
) -> LookupOutcome {
    let key = entry_lookup_key(transport, address, config).await;
    lookup(
        transport,
        GeoService::SpeedTest,
        &key,
        &Route::Direct,
        config.lookup_timeout,
    )
    .await
}

/// Landing path: query the IP-info service through the node.
pub async fn lookup_landing<T: HttpTransport>(
    transport: &T,
    node_name: &str,
    config: &Config,
) -> LookupOutcome {
    lookup(
        transport,
        GeoService::IpInfo,
        "",
        &Route::Node(node_name.to_string()),
        config.lookup_timeout,
    )
    .await
}
