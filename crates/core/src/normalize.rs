//! Raw header canonicalization.
//!
//! Export tooling spells the same metric a dozen ways ("Sum of
//! Followers_1", "sum of followers", ...). A small ordered dispatch
//! table maps the known spellings onto fixed canonical names; everything
//! else falls through to a generic tidy-up rule.

use regex::Regex;
use std::sync::OnceLock;

/// Ordered special-case table, first match wins. Patterns are
/// case-insensitive, anchored, and tolerate the `_N` de-duplication
/// suffix appended to repeated headers.
fn special_cases() -> &'static [(Regex, &'static str)] {
    static CASES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    CASES.get_or_init(|| {
        [
            (r"(?i)^month(_\d+)?$", "Month"),
            (r"(?i)^sum of followers(_\d+)?$", "Followers (Sum)"),
            (
                r"(?i)^sum of total impressions(_\d+)?$",
                "Total Impressions (Sum)",
            ),
            (r"(?i)^sum of reach(_\d+)?$", "Reach (Sum)"),
            (
                r"(?i)^sum of post video views(_\d+)?$",
                "Post Video Views (Sum)",
            ),
            (
                r"(?i)^followers \(as of 1st\)$",
                "Followers (As of 1st)",
            ),
            (
                r"(?i)^followers \(as of last day\)$",
                "Followers (As of last day)",
            ),
        ]
        .into_iter()
        .map(|(pattern, canonical)| (Regex::new(pattern).expect("valid regex"), canonical))
        .collect()
    })
}

/// Map a raw header string to its canonical display name.
///
/// Total and idempotent: blank input is returned unmodified, canonical
/// outputs map to themselves.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return raw.to_string();
    }

    for (pattern, canonical) in special_cases() {
        if pattern.is_match(trimmed) {
            return (*canonical).to_string();
        }
    }

    // Generic rule: underscores to spaces, collapse whitespace,
    // title-case the first letter of every word (rest untouched).
    let collapsed = trimmed
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    title_case(&collapsed)
}

/// Uppercase every letter that follows a non-alphanumeric character,
/// so words inside parentheses or after `+`/`-` get capitalized too.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;
    for c in s.chars() {
        if prev_is_word {
            out.push(c);
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_word = c.is_alphanumeric();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_cases() {
        assert_eq!(normalize_header("month"), "Month");
        assert_eq!(normalize_header("Month_2"), "Month");
        assert_eq!(normalize_header("Sum of Followers_1"), "Followers (Sum)");
        assert_eq!(normalize_header("SUM of Reach"), "Reach (Sum)");
        assert_eq!(
            normalize_header("sum of total impressions_3"),
            "Total Impressions (Sum)"
        );
        assert_eq!(
            normalize_header("sum of post video views"),
            "Post Video Views (Sum)"
        );
        assert_eq!(
            normalize_header("followers (as of 1st)"),
            "Followers (As of 1st)"
        );
        assert_eq!(
            normalize_header("Followers (as of last day)"),
            "Followers (As of last day)"
        );
    }

    #[test]
    fn test_generic_rule() {
        assert_eq!(normalize_header("organic_reach"), "Organic Reach");
        assert_eq!(normalize_header("  total   impressions "), "Total Impressions");
        assert_eq!(normalize_header("Perma Link"), "Perma Link");
        assert_eq!(
            normalize_header("Created Time (UTC)"),
            "Created Time (UTC)"
        );
    }

    #[test]
    fn test_generic_rule_capitalizes_after_punctuation() {
        assert_eq!(
            normalize_header("engagement rate (shares + saves)"),
            "Engagement Rate (Shares + Saves)"
        );
        assert_eq!(normalize_header("views/day"), "Views/Day");
    }

    #[test]
    fn test_blank_returned_unmodified() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "   ");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Sum of Followers_1", "month_2", "organic_reach", "", "Reach (Sum)"] {
            let once = normalize_header(input);
            assert_eq!(normalize_header(&once), once, "not stable for {input:?}");
        }
    }
}
