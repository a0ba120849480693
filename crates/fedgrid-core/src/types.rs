//! Domain types shared across the placement pipeline.

use serde::{Deserialize, Serialize};

/// Weight applied to any service the owner has no recorded SLA priority
/// for. Absence of preference data reorders nothing.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Capability class of a federated cloud service.
///
/// Wire tags follow the capability registry: `compute`, `storage`,
/// `block-storage`, `object-store`, `network`. Anything else parses to
/// `Unknown` — an explicit fallback, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Compute,
    Storage,
    BlockStorage,
    ObjectStore,
    Network,
    Unknown,
}

impl ServiceType {
    /// Parse a textual capability tag. Unrecognized tags map to `Unknown`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "compute" => Self::Compute,
            "storage" => Self::Storage,
            "block-storage" => Self::BlockStorage,
            "object-store" => Self::ObjectStore,
            "network" => Self::Network,
            _ => Self::Unknown,
        }
    }

    /// The canonical wire tag for this type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Storage => "storage",
            Self::BlockStorage => "block-storage",
            Self::ObjectStore => "object-store",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One cloud service offering eligible for placement, tied to a provider.
///
/// Produced once per ranking call by the catalog normalizer and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub service_id: String,
    pub provider_id: String,
    pub service_type: ServiceType,
    pub endpoint: String,
    pub region: Option<String>,
    pub tenant: Option<String>,
    pub hostname: Option<String>,
    /// Parent service for services layered on another (e.g. block storage
    /// attached to a compute service).
    pub parent_service_id: Option<String>,
    pub public_service: bool,
    pub iam_enabled: bool,
}

/// Telemetry snapshot for a single provider.
///
/// Absence of a sample is a valid, neutral state; the ranker treats a
/// missing sample as adjustment 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitoringSample {
    /// Mean CPU utilization across the provider's machines, 0..=100.
    pub cpu_utilization_percent: f64,
    /// Machines currently accepting workloads.
    pub available_machines: u32,
    /// Machines known to the provider in total.
    pub total_machines: u32,
}

/// A candidate with its preference weight, monitoring adjustment, and the
/// combined score. Computed once per ranking call; never recomputed while
/// a selection cursor is alive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// SLA preference weight (default 1.0 when the owner has none).
    pub weight: f64,
    /// Capacity-derived multiplier (1.0 when no sample exists).
    pub monitoring_adjustment: f64,
    /// `weight * monitoring_adjustment`.
    pub score: f64,
}

impl ScoredCandidate {
    pub fn service_id(&self) -> &str {
        &self.candidate.service_id
    }

    pub fn provider_id(&self) -> &str {
        &self.candidate.provider_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!(ServiceType::parse("compute"), ServiceType::Compute);
        assert_eq!(ServiceType::parse("storage"), ServiceType::Storage);
        assert_eq!(ServiceType::parse("block-storage"), ServiceType::BlockStorage);
        assert_eq!(ServiceType::parse("object-store"), ServiceType::ObjectStore);
        assert_eq!(ServiceType::parse("network"), ServiceType::Network);
    }

    #[test]
    fn parse_unknown_tag_falls_back() {
        assert_eq!(ServiceType::parse("quantum-annealer"), ServiceType::Unknown);
        assert_eq!(ServiceType::parse(""), ServiceType::Unknown);
        assert_eq!(ServiceType::parse("COMPUTE"), ServiceType::Unknown);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(ServiceType::parse(" compute "), ServiceType::Compute);
    }

    #[test]
    fn tag_roundtrip() {
        for ty in [
            ServiceType::Compute,
            ServiceType::Storage,
            ServiceType::BlockStorage,
            ServiceType::ObjectStore,
            ServiceType::Network,
            ServiceType::Unknown,
        ] {
            assert_eq!(ServiceType::parse(ty.as_tag()), ty);
        }
    }

    #[test]
    fn serde_uses_kebab_case_tags() {
        let json = serde_json::to_string(&ServiceType::BlockStorage).unwrap();
        assert_eq!(json, "\"block-storage\"");
        let back: ServiceType = serde_json::from_str("\"object-store\"").unwrap();
        assert_eq!(back, ServiceType::ObjectStore);
    }
}
