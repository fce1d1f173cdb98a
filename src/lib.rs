//! node_ipinfo library: entry and landing location lookups for a proxy node
//!
//! For one selected node this library determines:
//! - the **entry** location: the node's configured address, resolved over
//!   DNS-over-HTTP if it is a hostname, then looked up directly
//! - the **landing** location: the egress address seen by a request routed
//!   through the node
//!
//! Both lookups run concurrently with independent 5-second timeouts and are
//! merged into a single report. Failures degrade into the report instead of
//! aborting the invocation.
//!
//! # Example
//!
//! ```no_run
//! use node_ipinfo::{run_query, Config, NodeSelection, ReqwestTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let node = NodeSelection::new("JP 01", "jp1.example.net");
//! let transport = ReqwestTransport::new()?.with_node(&node.name, "http://127.0.0.1:7890")?;
//! let config = Config {
//!     mask: true,
//!     ..Default::default()
//! };
//!
//! let rendered = run_query(&transport, &node, &config).await;
//! println!("{}\n{}", rendered.title, rendered.body);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod address;
pub mod config;
mod country;
mod dns;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
mod mask;
pub mod report;
mod run;
pub mod transport;

// Re-export public API
pub use address::{classify_address, AddressKind};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use country::{country_name, display_country, COUNTRY_NAMES};
pub use dns::{parse_short_answer, resolve_ipv4, resolve_url};
pub use error_handling::{InitializationError, LookupFailure, TransportError};
pub use geoip::{GeoRecord, LookupOutcome};
pub use mask::IpMasker;
pub use report::{RenderedReport, Report};
pub use run::{
    entry_lookup_key, lookup_entry, lookup_landing, query_node, run_query, NodeSelection,
};
pub use transport::{HttpTransport, ReqwestTransport, Route};
