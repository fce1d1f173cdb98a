//! Display-ready projection of a [`Report`].
//!
//! The view applies masking, country-name mapping, and field fallbacks once,
//! so every renderer shows identical content.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::types::Report;
use crate::config::UNKNOWN;
use crate::country::display_country;
use crate::geoip::{GeoRecord, LookupOutcome};
use crate::mask::IpMasker;

static ASN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AS\d+\s*").expect("ASN prefix pattern is a valid regex"));

/// Removes a leading autonomous-system number, e.g. `AS2516 KDDI` -> `KDDI`.
pub fn strip_asn_prefix(organization: &str) -> &str {
    match ASN_PREFIX.find(organization) {
        Some(m) => &organization[m.end()..],
        None => organization,
    }
}

/// One rendered location block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationBlock {
    pub ip: String,
    pub location: String,
    /// `None` hides the operator line.
    pub operator: Option<String>,
}

/// Everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub node_name: String,
    pub entry: Option<LocationBlock>,
    pub landing: Option<LocationBlock>,
    pub errors: Vec<String>,
}

fn usable_record(outcome: Option<&LookupOutcome>) -> Option<(&GeoRecord, &str)> {
    let record = outcome?.record()?;
    let ip = record.usable_ip()?;
    Some((record, ip))
}

fn entry_block(record: &GeoRecord, ip: &str, masker: &IpMasker) -> LocationBlock {
    LocationBlock {
        ip: masker.mask(ip),
        location: record
            .province_or_city
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        operator: Some(record.isp.clone().unwrap_or_else(|| UNKNOWN.to_string())),
    }
}

fn landing_block(record: &GeoRecord, ip: &str, masker: &IpMasker) -> LocationBlock {
    LocationBlock {
        ip: masker.mask(ip),
        location: display_country(record.country_code.as_deref(), record.region.as_deref()),
        operator: record
            .organization
            .as_deref()
            .map(|org| strip_asn_prefix(org).to_string()),
    }
}

impl ReportView {
    pub fn build(report: &Report, masker: &IpMasker) -> Self {
        Self {
            node_name: report.node_name.clone(),
            entry: usable_record(report.entry.as_ref())
                .map(|(record, ip)| entry_block(record, ip, masker)),
            landing: usable_record(report.landing.as_ref())
                .map(|(record, ip)| landing_block(record, ip, masker)),
            errors: report.errors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupFailure;

    fn landing(org: Option<&str>) -> LookupOutcome {
        LookupOutcome::Success(GeoRecord {
            ip: Some("203.0.113.7".into()),
            country_code: Some("JP".into()),
            region: Some("Tokyo".into()),
            organization: org.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_strip_asn_prefix() {
        assert_eq!(strip_asn_prefix("AS2516 KDDI CORPORATION"), "KDDI CORPORATION");
        assert_eq!(strip_asn_prefix("AS13335Cloudflare"), "Cloudflare");
        assert_eq!(strip_asn_prefix("Hetzner AS24940"), "Hetzner AS24940");
        assert_eq!(strip_asn_prefix("ASIA NET"), "ASIA NET");
    }

    #[test]
    fn test_landing_block() {
        let report = Report::assemble("JP", None, Some(landing(Some("AS2516 KDDI"))));
        let view = ReportView::build(&report, &IpMasker::new(false));
        assert_eq!(
            view.landing,
            Some(LocationBlock {
                ip: "203.0.113.7".into(),
                location: "日本".into(),
                operator: Some("KDDI".into()),
            })
        );
        assert_eq!(view.entry, None);
    }

    #[test]
    fn test_landing_without_org_hides_operator() {
        let report = Report::assemble("JP", None, Some(landing(None)));
        let view = ReportView::build(&report, &IpMasker::new(true));
        let block = view.landing.expect("landing block");
        assert_eq!(block.ip, "203.0.113.*");
        assert_eq!(block.operator, None);
    }

    #[test]
    fn test_entry_block_defaults_to_unknown() {
        let entry = LookupOutcome::Success(GeoRecord {
            ip: Some("foo.test".into()),
            ..Default::default()
        });
        let report = Report::assemble("X", Some(entry), None);
        let view = ReportView::build(&report, &IpMasker::new(true));
        assert_eq!(
            view.entry,
            Some(LocationBlock {
                ip: "foo.test".into(),
                location: "unknown".into(),
                operator: Some("unknown".into()),
            })
        );
    }

    #[test]
    fn test_no_blocks_without_usable_ip() {
        let report = Report::assemble(
            "X",
            Some(LookupOutcome::Success(GeoRecord::default())),
            Some(LookupOutcome::failure(LookupFailure::Timeout)),
        );
        let view = ReportView::build(&report, &IpMasker::default());
        assert_eq!(view.entry, None);
        assert_eq!(view.landing, None);
        assert_eq!(view.errors, vec!["landing lookup: connection timeout".to_string()]);
    }
}
