//! Capability registry client — raw catalog DTOs and the source trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use fedgrid_core::ServiceType;

use crate::error::{CatalogError, CatalogResult};

/// Raw catalog document as returned by the capability registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub services: Vec<RawCloudService>,
}

/// One service descriptor as published by the registry.
///
/// Identifiers are optional at the wire level so that structural
/// validation is an explicit normalization step rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCloudService {
    pub id: Option<String>,
    pub provider_id: Option<String>,
    /// Capability tag, e.g. "compute" or "block-storage". Unrecognized
    /// tags normalize to `unknown` instead of failing.
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub tenant: Option<String>,
    pub hostname: Option<String>,
    pub parent_service_id: Option<String>,
    #[serde(default)]
    pub public_service: bool,
    #[serde(default)]
    pub iam_enabled: bool,
}

/// A capability registry queryable for service descriptors.
///
/// Implementations are constructed at composition time and passed into the
/// placement engine; there is no global registry of sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch service descriptors, optionally narrowed server-side to the
    /// given capability type. Callers must still filter the result — the
    /// narrowing is an optimization, not a contract.
    async fn query(&self, service_type: ServiceType) -> CatalogResult<RawCatalog>;
}

/// HTTP implementation backed by the registry's JSON endpoint.
pub struct HttpCatalogSource {
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn query(&self, service_type: ServiceType) -> CatalogResult<RawCatalog> {
        let url = format!(
            "{}?type={}",
            self.base_url.trim_end_matches('/'),
            service_type.as_tag()
        );
        fedgrid_core::http::get_json(&url)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_service_deserializes_with_defaults() {
        let json = r#"{"id": "svc-1", "provider_id": "prov-a", "type": "compute"}"#;
        let raw: RawCloudService = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("svc-1"));
        assert!(!raw.public_service);
        assert!(raw.endpoint.is_none());
    }

    #[test]
    fn raw_catalog_tolerates_missing_identifiers() {
        // Structural validation happens in the normalizer, not here.
        let json = r#"{"services": [{"type": "compute"}]}"#;
        let catalog: RawCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.services.len(), 1);
        assert!(catalog.services[0].id.is_none());
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog: RawCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.services.is_empty());
    }
}
