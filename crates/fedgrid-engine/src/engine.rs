//! Placement engine — runs the ranking pipeline and builds the cursor.
//!
//! Collaborators are constructed at composition time and passed in; the
//! engine holds no global state and every `build_cursor` call operates on
//! freshly fetched inputs.

use std::sync::Arc;

use tracing::{debug, info};

use fedgrid_catalog::{CatalogSource, HttpCatalogSource, normalize};
use fedgrid_core::{FedgridConfig, ServiceType, parse_duration};
use fedgrid_cursor::SelectionCursor;
use fedgrid_monitor::{HttpMonitoringSource, MonitoringGateway};
use fedgrid_ranking::rank;
use fedgrid_sla::{HttpPreferenceSource, PreferenceResolver};

use crate::error::EngineResult;
use crate::pipeline::PipelineStage;

/// Builds retryable placement cursors for deployment requests.
pub struct PlacementEngine {
    catalog: Arc<dyn CatalogSource>,
    preferences: PreferenceResolver,
    monitoring: MonitoringGateway,
}

impl PlacementEngine {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        preferences: PreferenceResolver,
        monitoring: MonitoringGateway,
    ) -> Self {
        Self {
            catalog,
            preferences,
            monitoring,
        }
    }

    /// Wire up HTTP-backed collaborators from a fedgrid.toml document.
    pub fn from_config(config: &FedgridConfig) -> Self {
        let catalog = Arc::new(HttpCatalogSource::new(config.catalog.url.clone()));
        let preferences = PreferenceResolver::new(Arc::new(HttpPreferenceSource::new(
            config.sla.url.clone(),
        )));

        let monitoring = match config.monitoring.as_ref() {
            Some(mon) => {
                let url = mon.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
                match url {
                    Some(url) => {
                        let provider = mon
                            .provider_timeout
                            .as_deref()
                            .and_then(parse_duration)
                            .unwrap_or(fedgrid_monitor::DEFAULT_PROVIDER_TIMEOUT);
                        let global = mon
                            .global_timeout
                            .as_deref()
                            .and_then(parse_duration)
                            .unwrap_or(fedgrid_monitor::DEFAULT_GLOBAL_TIMEOUT);
                        MonitoringGateway::new(Arc::new(HttpMonitoringSource::new(
                            url.to_string(),
                        )))
                        .with_timeouts(provider, global)
                    }
                    None => MonitoringGateway::disabled(),
                }
            }
            None => MonitoringGateway::disabled(),
        };

        Self::new(catalog, preferences, monitoring)
    }

    /// Run the full pipeline for one placement decision:
    /// `fetch_catalog → resolve_preferences → fetch_monitoring → rank → select`.
    ///
    /// Returns a cursor the workflow drives one candidate at a time,
    /// advancing past failures. Preference and monitoring outages degrade
    /// to neutral defaults; an empty candidate set is fatal.
    pub async fn build_cursor(
        &self,
        owner: &str,
        provider_scope: Option<&[String]>,
        requested: ServiceType,
    ) -> EngineResult<SelectionCursor> {
        debug!(stage = %PipelineStage::FetchCatalog, %owner, %requested, "pipeline starting");
        let raw = self.catalog.query(requested).await?;
        let candidates = normalize(&raw, requested, provider_scope)?;
        debug!(
            stage = %PipelineStage::FetchCatalog,
            candidates = candidates.len(),
            "catalog fetched"
        );

        let candidate_ids: Vec<String> =
            candidates.iter().map(|c| c.service_id.clone()).collect();
        debug!(stage = %PipelineStage::ResolvePreferences, %owner, "resolving SLA weights");
        let weights = self.preferences.resolve(owner, &candidate_ids).await?;

        let mut provider_ids: Vec<String> =
            candidates.iter().map(|c| c.provider_id.clone()).collect();
        provider_ids.sort();
        provider_ids.dedup();
        debug!(
            stage = %PipelineStage::FetchMonitoring,
            providers = provider_ids.len(),
            enabled = self.monitoring.is_enabled(),
            "fetching telemetry"
        );
        let monitoring = self.monitoring.fetch(&provider_ids).await?;

        debug!(stage = %PipelineStage::Rank, "ranking candidates");
        let ranked = rank(candidates, &weights, &monitoring)?;

        let cursor = SelectionCursor::new(ranked)?;
        info!(
            stage = %PipelineStage::Select,
            %owner,
            %requested,
            candidates = cursor.len(),
            "placement cursor built"
        );
        Ok(cursor)
    }
}
