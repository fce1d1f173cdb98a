//! Invocation orchestration.
//!
//! Runs the entry and landing paths concurrently, each with its own timeout,
//! and merges them into one report. Nothing here returns an error: every
//! failure degrades into the report.

mod paths;

use log::{debug, info};
use serde::Serialize;

use crate::config::Config;
use crate::geoip::LookupOutcome;
use crate::mask::IpMasker;
use crate::report::{self, PathKind, RenderedReport, Report};
use crate::transport::HttpTransport;

pub use paths::{entry_lookup_key, lookup_entry, lookup_landing};

/// The node selected by the host for this invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSelection {
    /// Display name, also used to route requests through the node
    pub name: String,
    /// Configured address: hostname or literal IP
    pub address: String,
}

impl NodeSelection {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Runs both lookup paths for `node` and assembles the report.
///
/// Total latency is bounded by the slower path, not the sum. A timeout or
/// transport failure on one path does not affect the other.
///
/// # Example
///
/// ```no_run
/// use node_ipinfo::{query_node, Config, NodeSelection, ReqwestTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let node = NodeSelection::new("HK 01", "hk1.example.net");
/// let transport = ReqwestTransport::new()?.with_node(&node.name, "socks5h://127.0.0.1:1080")?;
/// let report = query_node(&transport, &node, &Config::default()).await;
/// println!("{} error(s)", report.errors.len());
/// # Ok(())
/// # }
/// ```
pub async fn query_node<T: HttpTransport>(
    transport: &T,
    node: &NodeSelection,
    config: &Config,
) -> Report {
    let (entry, landing) = tokio::join!(
        lookup_entry(transport, &node.address, config),
        lookup_landing(transport, &node.name, config),
    );

    let report = Report::assemble(node.name.clone(), Some(entry), Some(landing));
    if report.has_errors() {
        info!(
            "Node {} queried with errors: entry={}, landing={}, errors={}",
            node.name,
            describe(report.outcome(PathKind::Entry)),
            describe(report.outcome(PathKind::Landing)),
            report.errors.len()
        );
    } else {
        info!(
            "Node {} queried: entry={}, landing={}",
            node.name,
            describe(report.outcome(PathKind::Entry)),
            describe(report.outcome(PathKind::Landing))
        );
    }
    report
}

/// Queries `node` and renders the report per `config`.
///
/// This is the host-facing entry point: it always completes with a report.
pub async fn run_query<T: HttpTransport>(
    transport: &T,
    node: &NodeSelection,
    config: &Config,
) -> RenderedReport {
    let queried = query_node(transport, node, config).await;
    let masker = IpMasker::new(config.mask);
    debug!(
        "Rendering {:?} report for {} (masking {})",
        config.output_format,
        node.name,
        if masker.is_enabled() { "on" } else { "off" }
    );
    report::assemble(
        queried.entry,
        queried.landing,
        &queried.node_name,
        &masker,
        config.output_format,
    )
}

fn describe(outcome: Option<&LookupOutcome>) -> String {
    match outcome {
        None => "skipped".to_string(),
        Some(LookupOutcome::Failure { reason }) => reason.to_string(),
        Some(LookupOutcome::Success(record)) if record.usable_ip().is_some() => "ok".to_string(),
        Some(LookupOutcome::Success(_)) => "empty".to_string(),
    }
}
