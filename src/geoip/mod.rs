//! Geo/ISP lookups over HTTP.
//!
//! This module queries the two public metadata services used for a node:
//! the entry service (direct route, keyed by the node's IP) and the landing
//! service (routed through the node, reporting its egress address). Results
//! are parsed into [`GeoRecord`]s wrapped in a [`LookupOutcome`].

mod extract;
mod lookup;
mod types;

// Re-export public API
pub use extract::{parse_entry_body, parse_landing_body};
pub use lookup::{lookup, GeoService};
pub use types::{GeoRecord, LookupOutcome};
