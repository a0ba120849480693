//! Candidate normalization — raw descriptors to a uniform candidate set.
//!
//! Filtering here is the eligibility step: services of the wrong
//! capability type (or outside the provider scope) are removed outright.
//! Scoring later only reorders the survivors.

use tracing::{debug, warn};

use fedgrid_core::{Candidate, ServiceType};

use crate::error::{CatalogError, CatalogResult};
use crate::source::{RawCatalog, RawCloudService};

/// Convert a raw catalog into candidates of the requested type.
///
/// `provider_scope` optionally restricts candidates to an allowlist of
/// provider ids; `None` keeps every provider in the catalog.
///
/// Fails only when an entry lacks its required identifiers. Unknown
/// capability tags never fail: they normalize to [`ServiceType::Unknown`]
/// and are dropped unless `Unknown` was explicitly requested.
pub fn normalize(
    raw: &RawCatalog,
    requested: ServiceType,
    provider_scope: Option<&[String]>,
) -> CatalogResult<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = Vec::new();

    for entry in &raw.services {
        let candidate = to_candidate(entry)?;

        if candidate.service_type != requested {
            continue;
        }
        if let Some(scope) = provider_scope {
            if !scope.contains(&candidate.provider_id) {
                debug!(
                    service_id = %candidate.service_id,
                    provider_id = %candidate.provider_id,
                    "candidate outside provider scope, skipping"
                );
                continue;
            }
        }
        if candidates
            .iter()
            .any(|c| c.service_id == candidate.service_id)
        {
            // Candidate ids must be unique within one ranking result.
            warn!(
                service_id = %candidate.service_id,
                "duplicate service id in catalog, keeping first occurrence"
            );
            continue;
        }

        candidates.push(candidate);
    }

    debug!(
        requested = %requested,
        total = raw.services.len(),
        eligible = candidates.len(),
        "catalog normalized"
    );
    Ok(candidates)
}

fn to_candidate(entry: &RawCloudService) -> CatalogResult<Candidate> {
    let service_id = required(&entry.id, "id")?;
    let provider_id = required(&entry.provider_id, "provider_id")?;

    let service_type = entry
        .service_type
        .as_deref()
        .map(ServiceType::parse)
        .unwrap_or(ServiceType::Unknown);

    Ok(Candidate {
        service_id,
        provider_id,
        service_type,
        endpoint: entry.endpoint.clone().unwrap_or_default(),
        region: entry.region.clone(),
        tenant: entry.tenant.clone(),
        hostname: entry.hostname.clone(),
        parent_service_id: entry.parent_service_id.clone(),
        public_service: entry.public_service,
        iam_enabled: entry.iam_enabled,
    })
}

fn required(value: &Option<String>, field: &str) -> CatalogResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CatalogError::Configuration(format!(
            "catalog entry missing required field `{field}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_service(id: &str, provider: &str, ty: &str) -> RawCloudService {
        RawCloudService {
            id: Some(id.to_string()),
            provider_id: Some(provider.to_string()),
            service_type: Some(ty.to_string()),
            endpoint: Some(format!("https://{provider}.example.org/{id}")),
            ..Default::default()
        }
    }

    fn catalog(services: Vec<RawCloudService>) -> RawCatalog {
        RawCatalog { services }
    }

    #[test]
    fn filters_by_requested_type() {
        let raw = catalog(vec![
            raw_service("a", "p1", "compute"),
            raw_service("c", "p1", "storage"),
        ]);

        let candidates = normalize(&raw, ServiceType::Compute, None).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].service_id, "a");
    }

    #[test]
    fn unknown_tag_is_excluded_not_an_error() {
        let raw = catalog(vec![
            raw_service("a", "p1", "compute"),
            raw_service("b", "p1", "hyperdrive"),
        ]);

        let candidates = normalize(&raw, ServiceType::Compute, None).unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn unknown_included_when_explicitly_requested() {
        let raw = catalog(vec![
            raw_service("a", "p1", "compute"),
            raw_service("b", "p1", "hyperdrive"),
        ]);

        let candidates = normalize(&raw, ServiceType::Unknown, None).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].service_id, "b");
        assert_eq!(candidates[0].service_type, ServiceType::Unknown);
    }

    #[test]
    fn missing_type_tag_normalizes_to_unknown() {
        let mut entry = raw_service("a", "p1", "compute");
        entry.service_type = None;

        let candidates = normalize(&catalog(vec![entry]), ServiceType::Unknown, None).unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn missing_id_is_a_configuration_error() {
        let mut entry = raw_service("a", "p1", "compute");
        entry.id = None;

        let err = normalize(&catalog(vec![entry]), ServiceType::Compute, None).unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[test]
    fn blank_provider_id_is_a_configuration_error() {
        let mut entry = raw_service("a", "p1", "compute");
        entry.provider_id = Some("  ".to_string());

        let err = normalize(&catalog(vec![entry]), ServiceType::Compute, None).unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[test]
    fn provider_scope_restricts_candidates() {
        let raw = catalog(vec![
            raw_service("a", "p1", "compute"),
            raw_service("b", "p2", "compute"),
        ]);

        let scope = vec!["p2".to_string()];
        let candidates = normalize(&raw, ServiceType::Compute, Some(&scope)).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].provider_id, "p2");
    }

    #[test]
    fn duplicate_service_id_keeps_first() {
        let mut second = raw_service("a", "p2", "compute");
        second.endpoint = Some("https://other.example.org".to_string());
        let raw = catalog(vec![raw_service("a", "p1", "compute"), second]);

        let candidates = normalize(&raw, ServiceType::Compute, None).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].provider_id, "p1");
    }

    #[test]
    fn metadata_carries_through() {
        let mut entry = raw_service("a", "p1", "compute");
        entry.region = Some("eu-west".to_string());
        entry.tenant = Some("tenant-1".to_string());
        entry.public_service = true;
        entry.iam_enabled = true;

        let candidates = normalize(&catalog(vec![entry]), ServiceType::Compute, None).unwrap();
        let c = &candidates[0];
        assert_eq!(c.region.as_deref(), Some("eu-west"));
        assert_eq!(c.tenant.as_deref(), Some("tenant-1"));
        assert!(c.public_service);
        assert!(c.iam_enabled);
    }

    #[test]
    fn empty_catalog_yields_empty_candidates() {
        let candidates = normalize(&catalog(vec![]), ServiceType::Compute, None).unwrap();
        assert!(candidates.is_empty());
    }
}
