//! DNS resolution for node hostnames.
//!
//! Resolution goes through a DNS-over-HTTP endpoint over the direct route
//! rather than the system resolver, so the answer reflects a public view of
//! the node's address.

mod resolution;

// Re-export public API
pub use resolution::{parse_short_answer, resolve_ipv4, resolve_url};
