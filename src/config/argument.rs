//! Host argument parsing.
//!
//! Hosts pass the masking switch as free-form text produced by their own
//! templating: a bare `true`, a bracketed `[true]`, an unreplaced `[{mask}]`,
//! or a `mask=true` pair. Parsing is deliberately tolerant; anything that is
//! not clearly affirmative leaves masking disabled.

use crate::config::constants::MASK_ARGUMENT_KEY;

const WRAPPING_CHARS: &[char] = &['[', ']', '{', '}', '(', ')', '"', '\''];

fn strip_wrapping(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || WRAPPING_CHARS.contains(&c))
}

fn parse_bool_token(token: &str) -> Option<bool> {
    match token {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses the host-supplied argument into the masking switch.
///
/// Comparison is case-insensitive after surrounding whitespace, brackets,
/// braces, and quotes are removed. Tokens may be separated by `,`, `&`, `;`
/// or whitespace. The first token that decides the value wins:
/// - `mask=<bool>` / `mask:<bool>` (other keys are ignored)
/// - a bare boolean token (`true`, `1`, `yes`, `on` or their negatives)
///
/// # Examples
///
/// ```
/// use node_ipinfo::config::parse_mask_argument;
///
/// assert!(parse_mask_argument(Some("[true]")));
/// assert!(parse_mask_argument(Some(" { MASK = True } ")));
/// assert!(!parse_mask_argument(Some("[false]")));
/// assert!(!parse_mask_argument(Some("[{mask}]")));
/// assert!(!parse_mask_argument(None));
/// ```
pub fn parse_mask_argument(argument: Option<&str>) -> bool {
    let Some(raw) = argument else {
        return false;
    };
    let normalized = strip_wrapping(raw).to_lowercase();

    for token in normalized
        .split(|c: char| c == ',' || c == '&' || c == ';' || c.is_whitespace())
        .map(strip_wrapping)
        .filter(|t| !t.is_empty())
    {
        if let Some((key, value)) = token.split_once(['=', ':']) {
            if strip_wrapping(key) != MASK_ARGUMENT_KEY {
                continue;
            }
            if let Some(flag) = parse_bool_token(strip_wrapping(value)) {
                return flag;
            }
            continue;
        }
        if let Some(flag) = parse_bool_token(token) {
            return flag;
        }
    }

    false
}
