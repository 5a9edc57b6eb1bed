//! Parser for free-text producer credit strings.
//!
//! The dataset credits producers in prose, e.g. `"Allan Carr"`,
//! `"Bo Derek and John Derek"`, or `"Steve Tisch, Jim Wilson and Kevin
//! Costner"`. Both `", "` and `" and "` act as separators.

/// Split a producer credit string into individual producer names.
///
/// Every `", "` is rewritten to `" and "` before splitting, so a three-way
/// credit like `"A, B and C"` splits into three names. Tokens are trimmed
/// and empty tokens dropped; source order and in-string duplicates are
/// preserved. Never fails: an empty string yields an empty vec.
pub fn parse_producers(raw: &str) -> Vec<String> {
    // The rewrite must happen before the split, otherwise "A, B and C"
    // would come out as ["A, B", "C"].
    raw.replace(", ", " and ")
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
