//! Forward-only selection cursor over a ranked candidate sequence.
//!
//! The cursor is the unit of persistence for workflow resumption: the
//! ranked sequence is fixed at creation, the position only moves forward,
//! and the failed set only grows. A candidate skipped or failed is never
//! offered again by the same cursor — the caller has no path to rewind.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use fedgrid_core::ScoredCandidate;

use crate::error::{CursorError, CursorResult};

/// Lifecycle state of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorState {
    /// At least one eligible candidate may remain.
    Active,
    /// Every candidate has been passed over or failed.
    Exhausted,
}

/// Stateful view over a ranked candidate sequence, consumed one candidate
/// at a time by the placement workflow: read `current()`, attempt
/// placement, and on failure `mark_failed()` + `advance()`.
#[derive(Debug, Clone)]
pub struct SelectionCursor {
    ordered: Vec<ScoredCandidate>,
    position: usize,
    failed: BTreeSet<String>,
    state: CursorState,
}

/// Serialized cursor state — ranked candidates with their scores (for
/// audit), the position, and the failed set. A flat record safe to store
/// as workflow state and reload verbatim; restoring reproduces identical
/// iteration behavior without re-ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub candidates: Vec<ScoredCandidate>,
    pub position: usize,
    pub failed: Vec<String>,
}

impl SelectionCursor {
    /// Build a cursor over an already-ranked sequence.
    pub fn new(ordered: Vec<ScoredCandidate>) -> CursorResult<Self> {
        if ordered.is_empty() {
            return Err(CursorError::EmptyCandidateSet);
        }
        Ok(Self {
            ordered,
            position: 0,
            failed: BTreeSet::new(),
            state: CursorState::Active,
        })
    }

    /// The current candidate: the first from `position` onward whose
    /// service has not been marked failed. Transitions to `Exhausted`
    /// when none remains.
    pub fn current(&mut self) -> CursorResult<&ScoredCandidate> {
        match self.eligible_index() {
            Some(i) => Ok(&self.ordered[i]),
            None => {
                self.state = CursorState::Exhausted;
                Err(CursorError::Exhausted)
            }
        }
    }

    /// Record a placement failure for a service. Idempotent; does not
    /// advance the position.
    pub fn mark_failed(&mut self, service_id: &str) {
        if self.failed.insert(service_id.to_string()) {
            debug!(service_id, failed = self.failed.len(), "candidate marked failed");
        }
    }

    /// Move past the current eligible candidate. Transitions to
    /// `Exhausted` when nothing remains.
    pub fn advance(&mut self) {
        if let Some(i) = self.eligible_index() {
            self.position = i + 1;
        }
        if self.eligible_index().is_none() {
            self.state = CursorState::Exhausted;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Number of candidates the cursor was built over.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Capture the cursor for persistence.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            candidates: self.ordered.clone(),
            position: self.position,
            failed: self.failed.iter().cloned().collect(),
        }
    }

    /// Rebuild a cursor from a persisted snapshot. The exhausted state is
    /// derived, not stored: a restored cursor with no eligible candidate
    /// left reports exhaustion exactly as the original would have.
    pub fn from_snapshot(snapshot: CursorSnapshot) -> CursorResult<Self> {
        if snapshot.candidates.is_empty() {
            return Err(CursorError::EmptyCandidateSet);
        }
        let mut cursor = Self {
            ordered: snapshot.candidates,
            position: snapshot.position,
            failed: snapshot.failed.into_iter().collect(),
            state: CursorState::Active,
        };
        if cursor.eligible_index().is_none() {
            cursor.state = CursorState::Exhausted;
        }
        Ok(cursor)
    }

    fn eligible_index(&self) -> Option<usize> {
        (self.position..self.ordered.len())
            .find(|&i| !self.failed.contains(self.ordered[i].service_id()))
    }
}
