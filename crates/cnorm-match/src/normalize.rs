//! Query text normalization.
//!
//! The same normalization is applied to the whole query and to the tokens
//! split from it, so a token always matches the text it was cut from.

/// Characters replaced by a space before matching.
///
/// Digit `0` is not in the set; stored dictionaries are keyed against
/// exactly these characters.
pub const EXCLUDED_CHARS: &[char] = &[
    ',', '.', '/', '!', '?', '<', '>', '[', ']', '|', '(', ')', '+', '=', '_', '*', '&', '%', ';',
    '№', '~', '@', '#', '$', '{', '}', '-', '`', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Lowercase `raw` and replace every excluded character with a single space.
///
/// The result is not trimmed and may be empty or all whitespace.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if EXCLUDED_CHARS.contains(&c) { ' ' } else { c })
        .collect()
}

/// Whitespace-delimited tokens of normalized text, empty tokens skipped.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Normalized text with all whitespace removed.
pub fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns true if normalization left nothing to match against.
pub fn is_blank(normalized: &str) -> bool {
    normalized.trim().is_empty()
}
