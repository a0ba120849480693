//! SLA preference service client — raw DTOs and the source trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{SlaError, SlaResult};

/// Raw preference document for one customer/owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPreferences {
    #[serde(default)]
    pub preferences: Vec<RawPreference>,
    #[serde(default)]
    pub sla: Vec<RawSla>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPreference {
    pub customer: Option<String>,
    /// Preference groups, one per capability type.
    #[serde(default)]
    pub preferences: Vec<RawPreferenceGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPreferenceGroup {
    pub service_type: Option<String>,
    #[serde(default)]
    pub priority: Vec<RawPriority>,
}

/// One priority record: the weight an SLA assigns to a service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPriority {
    pub sla_id: Option<String>,
    pub service_id: Option<String>,
    pub weight: Option<f64>,
}

/// SLA record referenced by priority entries. Carried for audit only; the
/// resolver does not interpret targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSla {
    pub id: Option<String>,
    #[serde(default)]
    pub targets: Vec<RawTarget>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTarget {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub unit: Option<String>,
}

/// A preference service queryable for an owner's SLA priorities.
#[async_trait]
pub trait PreferenceSource: Send + Sync {
    async fn query(&self, owner: &str) -> SlaResult<RawPreferences>;
}

/// HTTP implementation backed by the preference service's JSON endpoint.
pub struct HttpPreferenceSource {
    base_url: String,
}

impl HttpPreferenceSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PreferenceSource for HttpPreferenceSource {
    async fn query(&self, owner: &str) -> SlaResult<RawPreferences> {
        let url = format!("{}/{owner}", self.base_url.trim_end_matches('/'));
        fedgrid_core::http::get_json(&url)
            .await
            .map_err(|e| SlaError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_deserialize_from_nested_document() {
        let json = r#"{
            "preferences": [{
                "customer": "group-a",
                "preferences": [{
                    "service_type": "compute",
                    "priority": [
                        {"sla_id": "sla-1", "service_id": "svc-1", "weight": 2.5}
                    ]
                }]
            }],
            "sla": [{"id": "sla-1", "targets": [{"type": "computing_time", "unit": "h"}]}]
        }"#;

        let raw: RawPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(raw.preferences.len(), 1);
        let prio = &raw.preferences[0].preferences[0].priority[0];
        assert_eq!(prio.service_id.as_deref(), Some("svc-1"));
        assert_eq!(prio.weight, Some(2.5));
        assert_eq!(raw.sla[0].targets[0].kind.as_deref(), Some("computing_time"));
    }

    #[test]
    fn empty_document_is_valid() {
        let raw: RawPreferences = serde_json::from_str("{}").unwrap();
        assert!(raw.preferences.is_empty());
        assert!(raw.sla.is_empty());
    }
}
