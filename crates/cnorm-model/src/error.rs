use thiserror::Error;

/// A priority code outside `{1, 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid priority code {0}: expected 1 (high) or 2 (low)")]
pub struct InvalidPriority(pub i64);

/// Reasons a match query is rejected before any search runs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidQuery {
    #[error("query text is empty")]
    EmptyText,
    #[error("accuracy {0} is not a finite number")]
    AccuracyNotFinite(f64),
    #[error("accuracy {0} must lie strictly between 0 and 1")]
    AccuracyOutOfRange(f64),
}
