//! fedgrid.toml configuration parser.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FedgridConfig {
    pub catalog: CatalogConfig,
    pub sla: SlaConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the capability registry.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaConfig {
    /// Base URL of the SLA preference service.
    pub url: String,
}

/// Monitoring is feature-flagged: omitting the whole table (or the URL)
/// disables telemetry fetching and every provider ranks with a neutral
/// adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub url: Option<String>,
    /// Per-provider request timeout, e.g. "2s" or "500ms".
    pub provider_timeout: Option<String>,
    /// Upper bound on the whole telemetry batch.
    pub global_timeout: Option<String>,
}

impl FedgridConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FedgridConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Whether a monitoring endpoint is configured at all.
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.url.as_deref())
            .is_some_and(|u| !u.trim().is_empty())
    }
}

/// Parse a duration string like "5s", "500ms", "1m".
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(secs) = s.strip_suffix('s') {
        if let Some(ms) = secs.strip_suffix('m') {
            ms.parse::<u64>().ok().map(Duration::from_millis)
        } else {
            secs.parse::<u64>().ok().map(Duration::from_secs)
        }
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.parse::<u64>().ok().map(|m| Duration::from_secs(m * 60))
    } else {
        s.parse::<u64>().ok().map(Duration::from_secs)
    }
}
