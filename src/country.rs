//! Country code display names.
//!
//! A fixed ISO 3166-1 alpha-2 table of localized (Simplified Chinese) names,
//! built once on first use and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::UNKNOWN;

/// ISO 3166-1 alpha-2 code to localized display name.
pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("HK", "香港"),
    ("TW", "台湾"),
    ("KR", "韩国"),
    ("JP", "日本"),
    ("DE", "德国"),
    ("FR", "法国"),
    ("GB", "英国"),
    ("US", "美国"),
    ("SG", "新加坡"),
    ("AU", "澳大利亚"),
    ("CA", "加拿大"),
    ("RU", "俄罗斯"),
    ("IN", "印度"),
    ("IT", "意大利"),
    ("ES", "西班牙"),
    ("BR", "巴西"),
    ("NL", "荷兰"),
    ("CH", "瑞士"),
    ("SE", "瑞典"),
    ("NO", "挪威"),
    ("DK", "丹麦"),
    ("FI", "芬兰"),
    ("PL", "波兰"),
    ("UA", "乌克兰"),
    ("MX", "墨西哥"),
    ("AE", "阿联酋"),
    ("SA", "沙特阿拉伯"),
    ("TR", "土耳其"),
    ("AR", "阿根廷"),
    ("ZA", "南非"),
    ("NZ", "新西兰"),
    ("MY", "马来西亚"),
    ("TH", "泰国"),
    ("PH", "菲律宾"),
    ("VN", "越南"),
    ("ID", "印度尼西亚"),
];

static COUNTRY_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_NAMES.iter().copied().collect());

/// Looks up the localized name for a country code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_TABLE
        .get(code.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Display name for a location.
///
/// Order: mapped name for `code`, then `code` verbatim, then
/// `fallback_region`, then "unknown". Empty strings count as absent.
///
/// # Examples
///
/// ```
/// use node_ipinfo::display_country;
///
/// assert_eq!(display_country(Some("JP"), None), "日本");
/// assert_eq!(display_country(Some("IS"), Some("Capital Region")), "IS");
/// assert_eq!(display_country(None, Some("Capital Region")), "Capital Region");
/// assert_eq!(display_country(None, None), "unknown");
/// ```
pub fn display_country(code: Option<&str>, fallback_region: Option<&str>) -> String {
    let code = code.map(str::trim).filter(|c| !c.is_empty());
    let fallback_region = fallback_region.map(str::trim).filter(|r| !r.is_empty());

    match (code, fallback_region) {
        (Some(code), _) => country_name(code).unwrap_or(code).to_string(),
        (None, Some(region)) => region.to_string(),
        (None, None) => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_unique_two_letter_codes() {
        let codes: HashSet<_> = COUNTRY_NAMES.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), COUNTRY_NAMES.len());
        for code in codes {
            assert_eq!(code.len(), 2);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_every_mapped_code_ignores_fallback() {
        for &(code, name) in COUNTRY_NAMES {
            assert_eq!(display_country(Some(code), None), name);
            assert_eq!(display_country(Some(code), Some("Somewhere")), name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(display_country(Some("jp"), None), "日本");
        assert_eq!(country_name(" hk "), Some("香港"));
    }

    #[test]
    fn test_unmapped_code_is_returned_verbatim() {
        assert_eq!(display_country(Some("IS"), None), "IS");
        assert_eq!(display_country(Some("IS"), Some("Capital Region")), "IS");
    }

    #[test]
    fn test_absent_code_uses_fallback_region() {
        assert_eq!(display_country(None, Some("Tokyo")), "Tokyo");
        assert_eq!(display_country(Some(""), Some("Tokyo")), "Tokyo");
    }

    #[test]
    fn test_absent_everything_is_unknown() {
        assert_eq!(display_country(None, None), "unknown");
        assert_eq!(display_country(None, Some("")), "unknown");
        assert_eq!(display_country(Some("  "), Some("  ")), "unknown");
    }
}
