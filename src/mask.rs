//! IP address masking for display.
//!
//! Masking redacts the trailing group of an address with one mask character
//! per redacted character, so group count and separator positions survive.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MASK_CHAR;

static LAST_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d+)$").expect("octet pattern is a valid regex"));
static LAST_HEXTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([0-9a-fA-F]+)$").expect("hextet pattern is a valid regex"));

/// Applies (or skips) masking to displayed addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpMasker {
    enabled: bool,
}

impl IpMasker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Masks `ip` if masking is enabled.
    ///
    /// Dotted addresses lose their last numeric group, colon addresses their
    /// last hex group. Addresses with a dot are never treated as colon
    /// addresses, so `::ffff:1.2.3.4` masks the final octet. Anything else,
    /// including an already-masked address, comes back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_ipinfo::IpMasker;
    ///
    /// let masker = IpMasker::new(true);
    /// assert_eq!(masker.mask("203.0.113.77"), "203.0.113.**");
    /// assert_eq!(masker.mask("2001:db8::beef"), "2001:db8::****");
    /// assert_eq!(IpMasker::new(false).mask("203.0.113.77"), "203.0.113.77");
    /// ```
    pub fn mask(&self, ip: &str) -> String {
        if !self.enabled || ip.is_empty() {
            return ip.to_string();
        }
        if ip.contains('.') {
            return redact_last_group(&LAST_OCTET, ip, '.');
        }
        if ip.contains(':') {
            return redact_last_group(&LAST_HEXTET, ip, ':');
        }
        ip.to_string()
    }
}

fn redact_last_group(pattern: &Regex, ip: &str, separator: char) -> String {
    pattern
        .replace(ip, |caps: &regex::Captures| {
            let group_len = caps[1].chars().count();
            format!("{separator}{}", MASK_CHAR.to_string().repeat(group_len))
        })
        .into_owned()
}
