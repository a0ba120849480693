//! Ranking error types.

use thiserror::Error;

/// Result type alias for ranking operations.
pub type RankResult<T> = Result<T, RankError>;

/// Errors that can occur while ranking candidates.
#[derive(Debug, Error)]
pub enum RankError {
    /// No eligible candidates after type filtering. The one fatal
    /// condition in this component: no placement is possible and the
    /// caller must act on it.
    #[error("no eligible candidates to rank")]
    EmptyCandidateSet,
}
