// Item name normalization and ordering
//
// Item identity is ASCII case-insensitive. Non-ASCII characters are kept
// as-is: "Äpple" and "äpple" are two different items.

use std::cmp::Ordering;

/// Whitespace as classified by C `isspace` in the "C" locale.
///
/// Unlike `char::is_ascii_whitespace`, this includes the vertical tab.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip leading and trailing whitespace from a raw input line.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Compute the aggregation key for an item: trimmed and lowercased.
pub fn normalize(item: &str) -> String {
    trim(item).to_ascii_lowercase()
}

/// Total order on display names.
///
/// Names are compared case-insensitively first. Names that are equal under
/// case folding fall back to exact byte order, so two distinct names never
/// compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded_a = a.bytes().map(|c| c.to_ascii_lowercase());
    let folded_b = b.bytes().map(|c| c.to_ascii_lowercase());
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}
