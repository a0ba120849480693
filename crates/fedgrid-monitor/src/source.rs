//! Telemetry source — raw metrics DTOs and the source trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use fedgrid_core::MonitoringSample;

use crate::error::{MonitorError, MonitorResult};

/// Raw per-provider metrics document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProviderMetrics {
    pub group_name: Option<String>,
    #[serde(default)]
    pub machines: Vec<RawMachine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMachine {
    pub name: Option<String>,
    /// Whether the machine currently accepts workloads.
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub cpu_utilization_percent: f64,
}

fn default_true() -> bool {
    true
}

impl RawProviderMetrics {
    /// Collapse the machine list into a single provider sample.
    pub fn to_sample(&self) -> MonitoringSample {
        let total = self.machines.len() as u32;
        let available = self.machines.iter().filter(|m| m.available).count() as u32;
        let cpu = if self.machines.is_empty() {
            0.0
        } else {
            let sum: f64 = self
                .machines
                .iter()
                .map(|m| m.cpu_utilization_percent.clamp(0.0, 100.0))
                .sum();
            sum / self.machines.len() as f64
        };
        MonitoringSample {
            cpu_utilization_percent: cpu,
            available_machines: available,
            total_machines: total,
        }
    }
}

/// A telemetry backend queryable per provider.
///
/// `Ok(None)` means the backend answered but has no data for the
/// provider — a valid, neutral state.
#[async_trait]
pub trait MonitoringSource: Send + Sync {
    async fn query(&self, provider_id: &str) -> MonitorResult<Option<MonitoringSample>>;
}

/// HTTP implementation backed by the monitoring pillar's JSON endpoint.
pub struct HttpMonitoringSource {
    base_url: String,
}

impl HttpMonitoringSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MonitoringSource for HttpMonitoringSource {
    async fn query(&self, provider_id: &str) -> MonitorResult<Option<MonitoringSample>> {
        let url = format!(
            "{}/{provider_id}",
            self.base_url.trim_end_matches('/')
        );
        let metrics: RawProviderMetrics = fedgrid_core::http::get_json(&url)
            .await
            .map_err(|e| MonitorError::Unavailable(e.to_string()))?;
        Ok(Some(metrics.to_sample()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_aggregates_machines() {
        let metrics: RawProviderMetrics = serde_json::from_str(
            r#"{
                "group_name": "prov-a",
                "machines": [
                    {"name": "m1", "available": true, "cpu_utilization_percent": 40.0},
                    {"name": "m2", "available": false, "cpu_utilization_percent": 80.0}
                ]
            }"#,
        )
        .unwrap();

        let sample = metrics.to_sample();
        assert_eq!(sample.total_machines, 2);
        assert_eq!(sample.available_machines, 1);
        assert!((sample.cpu_utilization_percent - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn machines_default_to_available() {
        let metrics: RawProviderMetrics =
            serde_json::from_str(r#"{"machines": [{"name": "m1"}]}"#).unwrap();
        assert_eq!(metrics.to_sample().available_machines, 1);
    }

    #[test]
    fn utilization_is_clamped() {
        let metrics: RawProviderMetrics = serde_json::from_str(
            r#"{"machines": [{"name": "m1", "cpu_utilization_percent": 250.0}]}"#,
        )
        .unwrap();
        assert_eq!(metrics.to_sample().cpu_utilization_percent, 100.0);
    }

    #[test]
    fn empty_machine_list_is_a_zero_sample() {
        let metrics = RawProviderMetrics::default();
        let sample = metrics.to_sample();
        assert_eq!(sample.total_machines, 0);
        assert_eq!(sample.cpu_utilization_percent, 0.0);
    }
}
