//! Engine error roll-up.

use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the placement engine to the calling workflow.
///
/// Preference and monitoring trouble never appears here — both degrade to
/// neutral defaults inside their stages. What remains is either a
/// collaborator/config bug or a genuine "no placement possible" decision
/// the caller must act on.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog stage failed: {0}")]
    Catalog(#[from] fedgrid_catalog::CatalogError),

    #[error("preference stage failed: {0}")]
    Sla(#[from] fedgrid_sla::SlaError),

    #[error("monitoring stage failed: {0}")]
    Monitor(#[from] fedgrid_monitor::MonitorError),

    #[error("ranking stage failed: {0}")]
    Rank(#[from] fedgrid_ranking::RankError),

    #[error("selection failed: {0}")]
    Cursor(#[from] fedgrid_cursor::CursorError),
}

impl EngineError {
    /// Whether this error means "no placement is possible" (as opposed to
    /// a collaborator or configuration bug).
    pub fn is_no_placement(&self) -> bool {
        matches!(
            self,
            Self::Rank(fedgrid_ranking::RankError::EmptyCandidateSet)
                | Self::Cursor(fedgrid_cursor::CursorError::EmptyCandidateSet)
                | Self::Cursor(fedgrid_cursor::CursorError::Exhausted)
        )
    }
}
