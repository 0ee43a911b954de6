//! Alias dictionary records and transient match results.

use serde::{Deserialize, Serialize};

use crate::priority::Priority;

/// Value stored under a lowercase alias key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Tier used to prefer official names over indirect references.
    pub priority: Priority,
    /// Canonical country name returned when this alias matches.
    pub canonical: String,
}

impl AliasEntry {
    pub fn new(priority: Priority, canonical: impl Into<String>) -> Self {
        Self {
            priority,
            canonical: canonical.into(),
        }
    }

    pub fn high(canonical: impl Into<String>) -> Self {
        Self::new(Priority::High, canonical)
    }

    pub fn low(canonical: impl Into<String>) -> Self {
        Self::new(Priority::Low, canonical)
    }
}

/// An alias key that cleared the similarity threshold during a search.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    /// Matched alias key, as stored.
    pub key: String,
    pub priority: Priority,
    pub canonical: String,
    /// Similarity between the query form and `key` (0.0 to 1.0).
    pub score: f64,
}

impl MatchCandidate {
    pub fn new(key: impl Into<String>, entry: &AliasEntry, score: f64) -> Self {
        Self {
            key: key.into(),
            priority: entry.priority,
            canonical: entry.canonical.clone(),
            score,
        }
    }
}

/// Outcome of a country-name match.
///
/// `NotFound` is an expected result, not an error: nothing in the
/// dictionary was similar enough. `InvalidInput` means the query itself
/// was rejected before any search ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(String),
    NotFound,
    InvalidInput,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// Returns the canonical name when the query matched.
    pub fn canonical(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched(name) => Some(name),
            MatchOutcome::NotFound | MatchOutcome::InvalidInput => None,
        }
    }
}
