//! fedgrid-catalog — capability registry access and candidate normalization.
//!
//! The first pipeline stage: fetch raw service descriptors from the
//! capability registry and normalize them into [`fedgrid_core::Candidate`]s
//! of the requested capability type.
//!
//! # Components
//!
//! - **`source`** — `CatalogSource` trait, raw DTOs, HTTP client
//! - **`normalizer`** — structural validation and eligibility filtering

pub mod error;
pub mod normalizer;
pub mod source;

pub use error::{CatalogError, CatalogResult};
pub use normalizer::normalize;
pub use source::{CatalogSource, HttpCatalogSource, RawCatalog, RawCloudService};
