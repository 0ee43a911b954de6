//! Country name matching engine.
//!
//! A query runs through a fixed, ordered list of [`SearchStrategy`] values
//! and stops at the first one that produces a candidate:
//!
//! | # | Scope  | Form    | Tier |
//! |---|--------|---------|------|
//! | 1 | whole  | spaced  | high |
//! | 2 | whole  | compact | high |
//! | 3 | whole  | spaced  | low  |
//! | 4 | whole  | compact | low  |
//! | 5 | tokens |         | high |
//! | 6 | tokens |         | low  |
//!
//! Whole-string strategies take the single best key over the full alias
//! set and accept it only when its tier is the strategy's tier, so an exact
//! low-priority hit beats a weaker high-priority key. Token strategies
//! search only the keys of their own tier.

use std::fmt;

use cnorm_model::{AliasEntry, InvalidQuery, MatchCandidate, MatchOutcome, Priority};
use cnorm_store::AliasStore;

use crate::config::MatchConfig;
use crate::normalize::{compact, is_blank, normalize, tokens};
use crate::search::best_matches;

/// Which rendering of the whole query is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryForm {
    /// Normalized text as-is.
    Spaced,
    /// Normalized text with whitespace removed.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    Whole(QueryForm),
    Tokens,
}

/// One step of the tiered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchStrategy {
    pub scope: SearchScope,
    pub tier: Priority,
}

impl SearchStrategy {
    const fn new(scope: SearchScope, tier: Priority) -> Self {
        Self { scope, tier }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.scope {
            SearchScope::Whole(QueryForm::Spaced) => "whole/spaced",
            SearchScope::Whole(QueryForm::Compact) => "whole/compact",
            SearchScope::Tokens => "tokens",
        };
        write!(f, "{}/{}", scope, self.tier)
    }
}

/// Strategies in evaluation order.
pub const SEARCH_ORDER: [SearchStrategy; 6] = [
    SearchStrategy::new(SearchScope::Whole(QueryForm::Spaced), Priority::High),
    SearchStrategy::new(SearchScope::Whole(QueryForm::Compact), Priority::High),
    SearchStrategy::new(SearchScope::Whole(QueryForm::Spaced), Priority::Low),
    SearchStrategy::new(SearchScope::Whole(QueryForm::Compact), Priority::Low),
    SearchStrategy::new(SearchScope::Tokens, Priority::High),
    SearchStrategy::new(SearchScope::Tokens, Priority::Low),
];

/// The winning candidate and the strategy that found it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub candidate: MatchCandidate,
    pub strategy: SearchStrategy,
}

/// Check query text and accuracy before any search runs.
///
/// Accuracy must be finite and strictly between 0 and 1; both bounds are
/// rejected.
pub fn validate_query(text: &str, accuracy: f64) -> Result<(), InvalidQuery> {
    if text.is_empty() {
        return Err(InvalidQuery::EmptyText);
    }
    if !accuracy.is_finite() {
        return Err(InvalidQuery::AccuracyNotFinite(accuracy));
    }
    if accuracy <= 0.0 || accuracy >= 1.0 {
        return Err(InvalidQuery::AccuracyOutOfRange(accuracy));
    }
    Ok(())
}

/// Engine for resolving free-form text to a canonical country name.
///
/// Borrows an open store for its whole lifetime and never writes to it.
///
/// # Example
///
/// ```ignore
/// use cnorm_match::{MatchConfig, MatchEngine};
///
/// let engine = MatchEngine::new(&store, MatchConfig::default());
/// let outcome = engine.match_country_name("Russian Federation", 0.7);
/// ```
pub struct MatchEngine<'s, S: AliasStore + ?Sized> {
    store: &'s S,
    config: MatchConfig,
}

/// Store keys, all together and split by tier, in ascending key order.
struct TierIndex<'s> {
    all: Vec<&'s str>,
    high: Vec<&'s str>,
    low: Vec<&'s str>,
}

impl<'s> TierIndex<'s> {
    fn build<S: AliasStore + ?Sized>(store: &'s S) -> Self {
        let mut index = Self {
            all: Vec::new(),
            high: Vec::new(),
            low: Vec::new(),
        };
        for key in store.keys() {
            match store.get(key).map(|entry| entry.priority) {
                Some(Priority::High) => index.high.push(key),
                Some(Priority::Low) => index.low.push(key),
                None => continue,
            }
            index.all.push(key);
        }
        index
    }

    fn keys(&self, tier: Priority) -> &[&'s str] {
        match tier {
            Priority::High => &self.high,
            Priority::Low => &self.low,
        }
    }
}

/// The normalized query in every form the strategies search.
struct PreparedQuery<'q> {
    spaced: &'q str,
    compact: String,
    tokens: Vec<&'q str>,
}

impl<'q> PreparedQuery<'q> {
    fn new(normalized: &'q str) -> Self {
        Self {
            spaced: normalized,
            compact: compact(normalized),
            tokens: tokens(normalized).collect(),
        }
    }

    fn form(&self, form: QueryForm) -> &str {
        match form {
            QueryForm::Spaced => self.spaced,
            QueryForm::Compact => &self.compact,
        }
    }
}

struct Vote {
    count: usize,
    candidate: MatchCandidate,
}

impl<'s, S: AliasStore + ?Sized> MatchEngine<'s, S> {
    pub fn new(store: &'s S, config: MatchConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match `text` using the configured default accuracy.
    pub fn match_default(&self, text: &str) -> MatchOutcome {
        self.match_country_name(text, self.config.default_accuracy)
    }

    /// Match `text` against the alias dictionary.
    ///
    /// Returns [`MatchOutcome::InvalidInput`] for an empty query or an
    /// accuracy outside (0, 1), and [`MatchOutcome::NotFound`] when no alias
    /// is similar enough.
    pub fn match_country_name(&self, text: &str, accuracy: f64) -> MatchOutcome {
        match self.resolve(text, accuracy) {
            Ok(Some(resolution)) => MatchOutcome::Matched(resolution.candidate.canonical),
            Ok(None) => MatchOutcome::NotFound,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected country name query");
                MatchOutcome::InvalidInput
            }
        }
    }

    /// Run the tiered search and report which strategy matched.
    pub fn resolve(&self, text: &str, accuracy: f64) -> Result<Option<Resolution>, InvalidQuery> {
        validate_query(text, accuracy)?;

        let normalized = normalize(text);
        if is_blank(&normalized) {
            tracing::trace!("Query is blank after normalization");
            return Ok(None);
        }

        let query = PreparedQuery::new(&normalized);
        let tiers = TierIndex::build(self.store);

        for strategy in SEARCH_ORDER {
            let found = match strategy.scope {
                SearchScope::Whole(form) => self
                    .search_whole(query.form(form), form, &tiers.all, accuracy)
                    .filter(|candidate| candidate.priority == strategy.tier),
                SearchScope::Tokens => {
                    self.search_tokens(&query.tokens, tiers.keys(strategy.tier), accuracy)
                }
            };
            match found {
                Some(candidate) => {
                    tracing::debug!(
                        strategy = %strategy,
                        key = %candidate.key,
                        score = candidate.score,
                        canonical = %candidate.canonical,
                        "Matched country alias"
                    );
                    return Ok(Some(Resolution {
                        candidate,
                        strategy,
                    }));
                }
                None => tracing::trace!(strategy = %strategy, "No alias matched"),
            }
        }

        Ok(None)
    }

    /// Best key for the whole query over `keys`, if it passes the length
    /// guard. The caller decides whether its tier is acceptable.
    fn search_whole(
        &self,
        text: &str,
        form: QueryForm,
        keys: &[&'s str],
        accuracy: f64,
    ) -> Option<MatchCandidate> {
        let best = best_matches(text, keys.iter().copied(), accuracy, 1)
            .into_iter()
            .next()?;

        if let Some(tolerance) = self.config.length_tolerance {
            let key_len = match form {
                QueryForm::Spaced => best.key.chars().count(),
                QueryForm::Compact => compact(best.key).chars().count(),
            };
            if text.chars().count().abs_diff(key_len) > tolerance {
                tracing::trace!(
                    key = best.key,
                    score = best.score,
                    "Whole-string match rejected by length guard"
                );
                return None;
            }
        }

        let entry = self.entry(best.key)?;
        Some(MatchCandidate::new(best.key, entry, best.score))
    }

    /// Vote across tokens for the most supported canonical name.
    ///
    /// Each token votes once for every distinct canonical name among its
    /// top candidates. Ties go to the name whose first vote came earliest,
    /// in token order and then score order within a token.
    fn search_tokens(
        &self,
        tokens: &[&str],
        keys: &[&'s str],
        accuracy: f64,
    ) -> Option<MatchCandidate> {
        let mut votes: Vec<Vote> = Vec::new();

        for token in tokens {
            let matches = best_matches(
                token,
                keys.iter().copied(),
                accuracy,
                self.config.token_candidates,
            );
            let mut voted: Vec<&str> = Vec::new();
            for scored in matches {
                let Some(entry) = self.entry(scored.key) else {
                    continue;
                };
                if voted.contains(&entry.canonical.as_str()) {
                    continue;
                }
                voted.push(&entry.canonical);

                match votes
                    .iter_mut()
                    .find(|vote| vote.candidate.canonical == entry.canonical)
                {
                    Some(vote) => {
                        vote.count += 1;
                        if scored.score > vote.candidate.score {
                            vote.candidate = MatchCandidate::new(scored.key, entry, scored.score);
                        }
                    }
                    None => votes.push(Vote {
                        count: 1,
                        candidate: MatchCandidate::new(scored.key, entry, scored.score),
                    }),
                }
            }
        }

        let mut winner: Option<Vote> = None;
        for vote in votes {
            if winner.as_ref().is_none_or(|best| vote.count > best.count) {
                winner = Some(vote);
            }
        }
        winner.map(|vote| vote.candidate)
    }

    fn entry(&self, key: &str) -> Option<&'s AliasEntry> {
        self.store.get(key)
    }
}
