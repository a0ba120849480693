//! Monitoring gateway — fans out per-provider telemetry queries.
//!
//! Each provider is queried in its own task with its own timeout, so one
//! slow or broken provider only delays or omits its own entry. A global
//! timeout bounds the whole batch; providers without a result by then are
//! reported as "no sample", which the ranker treats as neutral.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use fedgrid_core::MonitoringSample;

use crate::error::{MonitorError, MonitorResult};
use crate::source::MonitoringSource;

/// Default per-provider query timeout.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(2);
/// Default bound on a whole telemetry batch.
pub const DEFAULT_GLOBAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Best-effort telemetry fetcher for a set of providers.
pub struct MonitoringGateway {
    source: Option<Arc<dyn MonitoringSource>>,
    provider_timeout: Duration,
    global_timeout: Duration,
}

impl MonitoringGateway {
    pub fn new(source: Arc<dyn MonitoringSource>) -> Self {
        Self {
            source: Some(source),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            global_timeout: DEFAULT_GLOBAL_TIMEOUT,
        }
    }

    /// A gateway with the monitoring feature switched off. `fetch` returns
    /// an all-absent mapping without making any call.
    pub fn disabled() -> Self {
        Self {
            source: None,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            global_timeout: DEFAULT_GLOBAL_TIMEOUT,
        }
    }

    pub fn with_timeouts(mut self, provider: Duration, global: Duration) -> Self {
        self.provider_timeout = provider;
        self.global_timeout = global;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// Fetch one optional sample per provider.
    ///
    /// Every requested provider id appears in the result. Individual
    /// failures and timeouts yield `None`; only malformed input fails.
    pub async fn fetch(
        &self,
        provider_ids: &[String],
    ) -> MonitorResult<HashMap<String, Option<MonitoringSample>>> {
        for id in provider_ids {
            if id.trim().is_empty() {
                return Err(MonitorError::Configuration(
                    "blank provider id in monitoring request".to_string(),
                ));
            }
        }

        let Some(source) = &self.source else {
            debug!(
                providers = provider_ids.len(),
                "monitoring disabled, returning absent samples"
            );
            return Ok(absent_for(provider_ids));
        };

        let results: Arc<Mutex<HashMap<String, Option<MonitoringSample>>>> =
            Arc::new(Mutex::new(HashMap::new()));

        let mut handles = Vec::with_capacity(provider_ids.len());
        for id in provider_ids {
            if results.lock().await.contains_key(id) {
                continue;
            }
            // Reserve the slot so duplicate ids spawn only one query.
            results.lock().await.insert(id.clone(), None);

            let source = Arc::clone(source);
            let results = Arc::clone(&results);
            let id = id.clone();
            let per_timeout = self.provider_timeout;

            handles.push(tokio::spawn(async move {
                let sample = match tokio::time::timeout(per_timeout, source.query(&id)).await {
                    Ok(Ok(sample)) => sample,
                    Ok(Err(e)) => {
                        warn!(provider_id = %id, error = %e, "monitoring query failed");
                        None
                    }
                    Err(_) => {
                        warn!(provider_id = %id, timeout = ?per_timeout, "monitoring query timed out");
                        None
                    }
                };
                results.lock().await.insert(id, sample);
            }));
        }

        // Bound the whole batch. Tasks that miss the deadline are aborted
        // and their providers keep the absent sample reserved above.
        let deadline = tokio::time::Instant::now() + self.global_timeout;
        for mut handle in handles {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if tokio::time::timeout(remaining, &mut handle).await.is_err() {
                warn!("global monitoring timeout reached, abandoning remaining queries");
                handle.abort();
            }
        }

        let results = results.lock().await;
        let merged: HashMap<_, _> = provider_ids
            .iter()
            .map(|id| (id.clone(), results.get(id).copied().flatten()))
            .collect();

        debug!(
            providers = merged.len(),
            with_samples = merged.values().filter(|s| s.is_some()).count(),
            "monitoring data gathered"
        );
        Ok(merged)
    }
}

fn absent_for(provider_ids: &[String]) -> HashMap<String, Option<MonitoringSample>> {
    provider_ids.iter().map(|id| (id.clone(), None)).collect()
}
