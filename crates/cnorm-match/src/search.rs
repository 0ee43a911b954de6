//! Ratio-based similarity search over alias keys.
//!
//! Similarity is the normalized Indel similarity, `2 * LCS / (|a| + |b|)`
//! over characters: `1.0` for identical strings, `0.0` for strings with no
//! character in common.

use std::cmp::Ordering;

use rapidfuzz::distance::indel;

/// An alias key with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredKey<'a> {
    pub key: &'a str,
    pub score: f64,
}

/// Similarity ratio between two strings (0.0 to 1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars())
}

/// Return up to `top_n` keys scoring at least `threshold` against `query`.
///
/// Results are ordered by descending score, then ascending key, so equal
/// scores always resolve the same way.
pub fn best_matches<'a, I>(query: &str, keys: I, threshold: f64, top_n: usize) -> Vec<ScoredKey<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    if top_n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredKey<'a>> = keys
        .into_iter()
        .map(|key| ScoredKey {
            key,
            score: similarity(query, key),
        })
        .filter(|candidate| candidate.score >= threshold)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(b.key))
    });
    scored.truncate(top_n);
    scored
}
