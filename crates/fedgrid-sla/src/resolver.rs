//! Preference weight resolution.
//!
//! Maps an owner's SLA priority records onto the current candidate set.
//! Candidates without a recorded priority get the default weight — SLA
//! data narrows nothing, it only reorders.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{SlaError, SlaResult};
use crate::source::{PreferenceSource, RawPreferences};

pub use fedgrid_core::DEFAULT_WEIGHT;

/// Resolves per-owner SLA weights for a candidate set.
pub struct PreferenceResolver {
    source: Arc<dyn PreferenceSource>,
}

impl PreferenceResolver {
    pub fn new(source: Arc<dyn PreferenceSource>) -> Self {
        Self { source }
    }

    /// Resolve the owner's weight for every candidate service id.
    ///
    /// Every id in `candidate_ids` appears in the result. When the
    /// preference service is unreachable the whole mapping degrades to
    /// defaults — ranking must remain usable without SLA data.
    pub async fn resolve(
        &self,
        owner: &str,
        candidate_ids: &[String],
    ) -> SlaResult<HashMap<String, f64>> {
        if owner.trim().is_empty() {
            return Err(SlaError::Configuration(
                "owner identity is empty".to_string(),
            ));
        }

        match self.source.query(owner).await {
            Ok(raw) => Ok(weights_from(&raw, candidate_ids)),
            Err(SlaError::Unavailable(reason)) => {
                warn!(%owner, %reason, "preference service unavailable, using default weights");
                Ok(default_weights(candidate_ids))
            }
            Err(other) => Err(other),
        }
    }
}

/// All-default mapping for a candidate set.
pub fn default_weights(candidate_ids: &[String]) -> HashMap<String, f64> {
    candidate_ids
        .iter()
        .map(|id| (id.clone(), DEFAULT_WEIGHT))
        .collect()
}

/// Extract per-service weights from a raw preference document.
///
/// Non-positive recorded weights are ignored (weights are positive reals
/// by contract); the first record wins when a service id repeats.
pub fn weights_from(raw: &RawPreferences, candidate_ids: &[String]) -> HashMap<String, f64> {
    let mut weights = default_weights(candidate_ids);
    let mut seen: HashSet<&str> = HashSet::new();

    for preference in &raw.preferences {
        for group in &preference.preferences {
            for priority in &group.priority {
                let Some(service_id) = priority.service_id.as_deref() else {
                    continue;
                };
                let Some(slot) = weights.get_mut(service_id) else {
                    continue;
                };
                match priority.weight {
                    Some(w) if w > 0.0 => {
                        if seen.insert(service_id) {
                            *slot = w;
                        }
                    }
                    Some(w) => {
                        warn!(
                            service_id,
                            weight = w,
                            "ignoring non-positive SLA weight"
                        );
                    }
                    None => {}
                }
            }
        }
    }

    debug!(
        candidates = candidate_ids.len(),
        recorded = seen.len(),
        "preference weights resolved"
    );
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RawPreference, RawPreferenceGroup, RawPriority};

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn prefs_with(priorities: Vec<RawPriority>) -> RawPreferences {
        RawPreferences {
            preferences: vec![RawPreference {
                customer: Some("group-a".to_string()),
                preferences: vec![RawPreferenceGroup {
                    service_type: Some("compute".to_string()),
                    priority: priorities,
                }],
            }],
            sla: vec![],
        }
    }

    fn priority(service_id: &str, weight: f64) -> RawPriority {
        RawPriority {
            sla_id: Some("sla-1".to_string()),
            service_id: Some(service_id.to_string()),
            weight: Some(weight),
        }
    }

    #[test]
    fn recorded_weights_apply() {
        let raw = prefs_with(vec![priority("a", 2.0)]);
        let weights = weights_from(&raw, &ids(&["a", "b"]));

        assert_eq!(weights["a"], 2.0);
        assert_eq!(weights["b"], DEFAULT_WEIGHT);
    }

    #[test]
    fn unknown_candidate_gets_default() {
        let raw = RawPreferences::default();
        let weights = weights_from(&raw, &ids(&["a"]));
        assert_eq!(weights["a"], DEFAULT_WEIGHT);
    }

    #[test]
    fn preference_for_absent_service_is_ignored() {
        let raw = prefs_with(vec![priority("ghost", 9.0)]);
        let weights = weights_from(&raw, &ids(&["a"]));

        assert_eq!(weights.len(), 1);
        assert_eq!(weights["a"], DEFAULT_WEIGHT);
    }

    #[test]
    fn non_positive_weight_falls_back_to_default() {
        let raw = prefs_with(vec![priority("a", 0.0), priority("b", -1.5)]);
        let weights = weights_from(&raw, &ids(&["a", "b"]));

        assert_eq!(weights["a"], DEFAULT_WEIGHT);
        assert_eq!(weights["b"], DEFAULT_WEIGHT);
    }

    #[test]
    fn first_record_wins_for_repeated_service() {
        let raw = prefs_with(vec![priority("a", 3.0), priority("a", 7.0)]);
        let weights = weights_from(&raw, &ids(&["a"]));
        assert_eq!(weights["a"], 3.0);
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl PreferenceSource for FailingSource {
        async fn query(&self, _owner: &str) -> SlaResult<RawPreferences> {
            Err(SlaError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn unavailable_source_degrades_to_defaults() {
        let resolver = PreferenceResolver::new(Arc::new(FailingSource));
        let weights = resolver.resolve("group-a", &ids(&["a", "b"])).await.unwrap();

        assert_eq!(weights.len(), 2);
        assert!(weights.values().all(|w| *w == DEFAULT_WEIGHT));
    }

    #[tokio::test]
    async fn empty_owner_is_a_configuration_error() {
        let resolver = PreferenceResolver::new(Arc::new(FailingSource));
        let err = resolver.resolve("  ", &ids(&["a"])).await.unwrap_err();
        assert!(matches!(err, SlaError::Configuration(_)));
    }
}
