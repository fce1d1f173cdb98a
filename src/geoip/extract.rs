//! Response body parsing.
//!
//! Bodies that are not valid JSON, or that lack the expected fields, produce
//! an empty [`GeoRecord`] rather than an error. Only transport faults are
//! reported to the user.

use log::debug;
use serde_json::Value;

use super::types::GeoRecord;

/// Parses a body as a JSON object, degrading to `None` on anything else.
fn parse_object(body: &str) -> Option<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            debug!("Lookup response is JSON but not an object: {}", other);
            None
        }
        Err(e) => {
            debug!("Lookup response is not valid JSON: {}", e);
            None
        }
    }
}

/// Returns a non-empty string field.
fn str_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses an `ipinfo.io/json` body (landing path).
///
/// ```json
/// {"ip":"203.0.113.7","city":"Tokyo","region":"Tokyo","country":"JP","org":"AS2516 KDDI CORPORATION"}
/// ```
pub fn parse_landing_body(body: &str) -> GeoRecord {
    let Some(map) = parse_object(body) else {
        return GeoRecord::default();
    };

    GeoRecord {
        ip: str_field(&map, "ip"),
        country_code: str_field(&map, "country"),
        region: str_field(&map, "region"),
        organization: str_field(&map, "org"),
        province_or_city: str_field(&map, "city"),
        isp: None,
    }
}

/// Parses an `api-v3.speedtest.cn/ip` body (entry path).
///
/// The service nests its answer under `data`:
///
/// ```json
/// {"code":0,"data":{"ip":"203.0.113.7","countryCode":"CN","province":"广东","city":"深圳","isp":"电信"}}
/// ```
///
/// The displayed IP is the key the caller queried (`lookup_key`), which is the
/// resolved address or, when resolution failed, the hostname itself. Without a
/// `data` object the record is empty.
pub fn parse_entry_body(body: &str, lookup_key: &str) -> GeoRecord {
    let Some(map) = parse_object(body) else {
        return GeoRecord::default();
    };
    let Some(Value::Object(data)) = map.get("data") else {
        debug!("Entry lookup response has no data object");
        return GeoRecord::default();
    };

    let province = str_field(data, "province");
    let city = str_field(data, "city");
    let location = format!(
        "{}{}",
        province.as_deref().unwrap_or_default(),
        city.as_deref().unwrap_or_default()
    );

    GeoRecord {
        ip: Some(lookup_key.to_string()),
        country_code: str_field(data, "countryCode"),
        region: province,
        organization: None,
        province_or_city: Some(location).filter(|l| !l.is_empty()),
        isp: str_field(data, "isp").or_else(|| str_field(data, "operator")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_landing_body() {
        let body = r#"{"ip":"203.0.113.7","city":"Tokyo","region":"Tokyo","country":"JP","org":"AS2516 KDDI CORPORATION","readme":"https://ipinfo.io/missingauth"}"#;
        let record = parse_landing_body(body);
        assert_eq!(record.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(record.country_code.as_deref(), Some("JP"));
        assert_eq!(record.region.as_deref(), Some("Tokyo"));
        assert_eq!(record.organization.as_deref(), Some("AS2516 KDDI CORPORATION"));
        assert_eq!(record.province_or_city.as_deref(), Some("Tokyo"));
        assert_eq!(record.isp, None);
    }

    #[test]
    fn test_parse_landing_body_malformed_degrades_to_empty() {
        assert_eq!(parse_landing_body("<html>502 Bad Gateway</html>"), GeoRecord::default());
        assert_eq!(parse_landing_body(""), GeoRecord::default());
        assert_eq!(parse_landing_body("[1,2,3]"), GeoRecord::default());
    }

    #[test]
    fn test_parse_landing_body_missing_and_mistyped_fields() {
        let record = parse_landing_body(r#"{"ip":"","country":7,"bogon":true}"#);
        assert_eq!(record, GeoRecord::default());
    }

    #[test]
    fn test_parse_entry_body() {
        let body = r#"{"code":0,"msg":"success","data":{"ip":"203.0.113.7","countryCode":"CN","province":"广东","city":"深圳","isp":"电信","operator":"中国电信"}}"#;
        let record = parse_entry_body(body, "203.0.113.7");
        assert_eq!(record.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(record.country_code.as_deref(), Some("CN"));
        assert_eq!(record.province_or_city.as_deref(), Some("广东深圳"));
        assert_eq!(record.isp.as_deref(), Some("电信"));
    }

    #[test]
    fn test_parse_entry_body_uses_lookup_key_as_ip() {
        let body = r#"{"data":{"ip":"198.51.100.1","city":"Singapore"}}"#;
        let record = parse_entry_body(body, "foo.test");
        assert_eq!(record.ip.as_deref(), Some("foo.test"));
        assert_eq!(record.province_or_city.as_deref(), Some("Singapore"));
    }

    #[test]
    fn test_parse_entry_body_operator_fallback() {
        let body = r#"{"data":{"isp":"","operator":"Telstra"}}"#;
        let record = parse_entry_body(body, "1.2.3.4");
        assert_eq!(record.isp.as_deref(), Some("Telstra"));
        assert_eq!(record.province_or_city, None);
    }

    #[test]
    fn test_parse_entry_body_without_data() {
        assert_eq!(
            parse_entry_body(r#"{"code":-1,"msg":"invalid ip"}"#, "1.2.3.4"),
            GeoRecord::default()
        );
        assert_eq!(parse_entry_body(r#"{"data":null}"#, "1.2.3.4"), GeoRecord::default());
        assert_eq!(parse_entry_body("oops", "1.2.3.4"), GeoRecord::default());
    }
}
