//! fedgrid-engine — the placement ranking pipeline.
//!
//! Turns a deployment request into a deterministic, retryable ordering of
//! federated cloud services, consumed one candidate at a time by the
//! deployment workflow.
//!
//! # Architecture
//!
//! ```text
//! PlacementEngine::build_cursor(owner, scope, type)
//!   ├── fetch_catalog        (fedgrid-catalog: CatalogSource + normalize)
//!   ├── resolve_preferences  (fedgrid-sla: PreferenceResolver, degrades)
//!   ├── fetch_monitoring     (fedgrid-monitor: MonitoringGateway, degrades)
//!   ├── rank                 (fedgrid-ranking: pure, deterministic)
//!   └── select               (fedgrid-cursor: SelectionCursor)
//! ```
//!
//! The workflow then loops: `current()` → attempt placement → on failure
//! `mark_failed()` + `advance()` — persisting `snapshot()` between steps
//! so a restart resumes exactly where it left off.

pub mod engine;
pub mod error;
pub mod pipeline;

pub use engine::PlacementEngine;
pub use error::{EngineError, EngineResult};
pub use pipeline::PipelineStage;
