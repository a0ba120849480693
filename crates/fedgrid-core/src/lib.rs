//! fedgrid-core — shared types for the placement ranking pipeline.
//!
//! Holds the domain model every other fedgrid crate builds on:
//!
//! - **`types`** — `ServiceType`, `Candidate`, `MonitoringSample`,
//!   `ScoredCandidate`
//! - **`config`** — fedgrid.toml parsing (catalog/SLA/monitoring endpoints)
//! - **`http`** — shared JSON GET helper for the source clients

pub mod config;
pub mod http;
pub mod types;

pub use config::{FedgridConfig, parse_duration};
pub use types::{Candidate, DEFAULT_WEIGHT, MonitoringSample, ScoredCandidate, ServiceType};
