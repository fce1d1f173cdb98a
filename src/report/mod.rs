//! Report assembly and rendering.
//!
//! A [`Report`] merges the entry and landing outcomes with the errors they
//! produced. [`ReportView`] turns it into display blocks (masking, country
//! names, fallbacks), and [`render`] formats the view for the host.

mod render;
mod types;
mod view;

// Re-export public API
pub use render::{render, render_html, render_json, render_text, RenderedReport};
pub use types::{PathKind, Report};
pub use view::{strip_asn_prefix, LocationBlock, ReportView};

use crate::config::OutputFormat;
use crate::geoip::LookupOutcome;
use crate::mask::IpMasker;

/// Assembles and renders a report in one step.
pub fn assemble(
    entry: Option<LookupOutcome>,
    landing: Option<LookupOutcome>,
    node_name: &str,
    masker: &IpMasker,
    format: OutputFormat,
) -> RenderedReport {
    let report = Report::assemble(node_name, entry, landing);
    render(&ReportView::build(&report, masker), format)
}
