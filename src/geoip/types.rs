//! Geo lookup data structures.

use serde::Serialize;

use crate::error_handling::LookupFailure;

/// Location and operator metadata parsed from a lookup response.
///
/// Every field is optional; absent fields render as "unknown". A record
/// without an `ip` contributes nothing to the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeoRecord {
    pub ip: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub organization: Option<String>,
    pub province_or_city: Option<String>,
    pub isp: Option<String>,
}

impl GeoRecord {
    /// The IP to display, if the record carries a non-empty one.
    pub fn usable_ip(&self) -> Option<&str> {
        self.ip.as_deref().filter(|ip| !ip.is_empty())
    }
}

/// Result of one lookup path. Exactly one is produced per path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    Success(GeoRecord),
    Failure { reason: LookupFailure },
}

impl LookupOutcome {
    pub fn failure(reason: LookupFailure) -> Self {
        LookupOutcome::Failure { reason }
    }

    pub fn record(&self) -> Option<&GeoRecord> {
        match self {
            LookupOutcome::Success(record) => Some(record),
            LookupOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<LookupFailure> {
        match self {
            LookupOutcome::Success(_) => None,
            LookupOutcome::Failure { reason } => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_ip_ignores_empty() {
        let mut record = GeoRecord::default();
        assert_eq!(record.usable_ip(), None);
        record.ip = Some(String::new());
        assert_eq!(record.usable_ip(), None);
        record.ip = Some("203.0.113.7".into());
        assert_eq!(record.usable_ip(), Some("203.0.113.7"));
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = LookupOutcome::Success(GeoRecord::default());
        assert!(ok.record().is_some());
        assert_eq!(ok.failure_reason(), None);

        let failed = LookupOutcome::failure(LookupFailure::Timeout);
        assert!(failed.record().is_none());
        assert_eq!(failed.failure_reason(), Some(LookupFailure::Timeout));
    }

    #[test]
    fn test_outcome_serialization() {
        let failed = LookupOutcome::failure(LookupFailure::RequestFailed);
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["reason"], "request_failed");

        let ok = LookupOutcome::Success(GeoRecord {
            ip: Some("1.2.3.4".into()),
            ..Default::default()
        });
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["ip"], "1.2.3.4");
    }
}
