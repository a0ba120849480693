//! Candidate scoring.
//!
//! Combines the owner's SLA weight with a capacity-derived monitoring
//! adjustment. Scoring only reorders candidates — eligibility filtering
//! happened in the normalizer, and no monitoring state ever removes a
//! candidate here.

use fedgrid_core::{Candidate, DEFAULT_WEIGHT, MonitoringSample, ScoredCandidate};

/// Lower bound of the monitoring adjustment. A fully saturated provider
/// approaches but never reaches zero, so it can still be selected once
/// everything better has failed.
pub const MIN_ADJUSTMENT: f64 = 0.05;

/// Adjustment applied when no telemetry sample exists for a provider.
pub const NEUTRAL_ADJUSTMENT: f64 = 1.0;

/// Capacity-derived score multiplier for a provider.
///
/// Maps headroom linearly onto `(MIN_ADJUSTMENT, 2 - MIN_ADJUSTMENT)`:
/// 0.5 headroom is exactly neutral (1.0), so a provider at average load
/// ranks the same as one without telemetry. Headroom is the mean of the
/// idle-CPU fraction and the available-machine fraction. A sample with no
/// known machines carries no capacity signal and stays neutral.
pub fn monitoring_adjustment(sample: Option<&MonitoringSample>) -> f64 {
    let Some(sample) = sample else {
        return NEUTRAL_ADJUSTMENT;
    };
    if sample.total_machines == 0 {
        return NEUTRAL_ADJUSTMENT;
    }

    let idle = 1.0 - (sample.cpu_utilization_percent / 100.0).clamp(0.0, 1.0);
    let available = f64::from(sample.available_machines.min(sample.total_machines))
        / f64::from(sample.total_machines);
    let headroom = (idle + available) / 2.0;

    MIN_ADJUSTMENT + (2.0 - 2.0 * MIN_ADJUSTMENT) * headroom
}

/// Score a single candidate. `weight` defaults to 1.0 upstream when the
/// owner has no recorded preference.
pub fn score_candidate(
    candidate: Candidate,
    weight: f64,
    sample: Option<&MonitoringSample>,
) -> ScoredCandidate {
    let weight = if weight > 0.0 { weight } else { DEFAULT_WEIGHT };
    let monitoring_adjustment = monitoring_adjustment(sample);
    ScoredCandidate {
        score: weight * monitoring_adjustment,
        candidate,
        weight,
        monitoring_adjustment,
    }
}
