//! Selection cursor error types.

use thiserror::Error;

/// Result type alias for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while driving a selection cursor.
#[derive(Debug, Error)]
pub enum CursorError {
    /// A cursor cannot be built over zero candidates — no placement is
    /// possible.
    #[error("no candidates to select from")]
    EmptyCandidateSet,

    /// Every ranked candidate has been tried and failed. Surfaced to the
    /// workflow as a placement failure.
    #[error("all ranked candidates exhausted")]
    Exhausted,
}
