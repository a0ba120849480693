//! fedgrid-sla — per-owner SLA preference weights.
//!
//! The second pipeline stage: fetch the owner's SLA priority records and
//! turn them into a per-service weight mapping. Weights only reorder
//! candidates; a service without a recorded priority keeps the default
//! weight of 1.0 and is never excluded.
//!
//! Preference data is optional by design — when the service is down the
//! resolver degrades to all-default weights and ranking continues.

pub mod error;
pub mod resolver;
pub mod source;

pub use error::{SlaError, SlaResult};
pub use resolver::{DEFAULT_WEIGHT, PreferenceResolver, default_weights, weights_from};
pub use source::{HttpPreferenceSource, PreferenceSource, RawPreferences, RawPriority};
