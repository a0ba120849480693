//! SLA preference error types.

use thiserror::Error;

/// Result type alias for preference operations.
pub type SlaResult<T> = Result<T, SlaError>;

/// Errors that can occur while resolving SLA preference weights.
#[derive(Debug, Error)]
pub enum SlaError {
    /// The owner identity itself cannot be resolved — a caller error,
    /// surfaced immediately.
    #[error("invalid owner: {0}")]
    Configuration(String),

    /// The preference service is unreachable. Resolved locally by
    /// degrading to all-default weights; never surfaced as a ranking
    /// failure.
    #[error("preference service unavailable: {0}")]
    Unavailable(String),
}
