//! Deterministic candidate ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use fedgrid_core::{Candidate, DEFAULT_WEIGHT, MonitoringSample, ScoredCandidate};

use crate::error::{RankError, RankResult};
use crate::scorer::score_candidate;

/// Rank candidates into a total order: strictly descending by score, ties
/// broken by ascending service id so repeated calls over the same inputs
/// always produce the same sequence.
///
/// A pure computation over already-fetched data. Missing weights default
/// to 1.0; missing monitoring samples stay neutral; neither ever drops a
/// candidate.
pub fn rank(
    candidates: Vec<Candidate>,
    weights: &HashMap<String, f64>,
    monitoring: &HashMap<String, Option<MonitoringSample>>,
) -> RankResult<Vec<ScoredCandidate>> {
    if candidates.is_empty() {
        return Err(RankError::EmptyCandidateSet);
    }

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let weight = weights
                .get(&candidate.service_id)
                .copied()
                .unwrap_or(DEFAULT_WEIGHT);
            let sample = monitoring
                .get(&candidate.provider_id)
                .and_then(Option::as_ref);
            score_candidate(candidate, weight, sample)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate.service_id.cmp(&b.candidate.service_id))
    });

    debug!(
        ranked = scored.len(),
        top = %scored[0].candidate.service_id,
        top_score = scored[0].score,
        "candidates ranked"
    );
    Ok(scored)
}
