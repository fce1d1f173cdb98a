//! Node address classification.
//!
//! Decides whether a configured node address is already a literal IP or a
//! hostname that has to be resolved first. The checks are syntactic only:
//! `999.1.1.1` counts as IPv4 and anything containing a colon counts as IPv6.

use std::sync::LazyLock;

use regex::Regex;

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").expect("IPv4 pattern is a valid regex")
});

/// Shape of a node address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    Hostname,
}

impl AddressKind {
    pub fn is_literal_ip(&self) -> bool {
        !matches!(self, AddressKind::Hostname)
    }
}

/// Classifies a node address.
///
/// # Examples
///
/// ```
/// use node_ipinfo::{classify_address, AddressKind};
///
/// assert_eq!(classify_address("1.2.3.4"), AddressKind::Ipv4);
/// assert_eq!(classify_address("2001:db8::1"), AddressKind::Ipv6);
/// assert_eq!(classify_address("example.com"), AddressKind::Hostname);
/// ```
pub fn classify_address(address: &str) -> AddressKind {
    if IPV4_PATTERN.is_match(address) {
        AddressKind::Ipv4
    } else if address.contains(':') {
        AddressKind::Ipv6
    } else {
        AddressKind::Hostname
    }
}
