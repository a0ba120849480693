//! fedgrid-ranking — deterministic candidate ordering.
//!
//! The fourth pipeline stage: a pure computation that combines normalized
//! candidates, per-service SLA weights, and optional provider telemetry
//! into a reproducible total order.
//!
//! # Components
//!
//! - **`scorer`** — monitoring adjustment and `weight * adjustment` scoring
//! - **`ranker`** — descending-score sort with a stable service-id tie-break

pub mod error;
pub mod ranker;
pub mod scorer;

pub use error::{RankError, RankResult};
pub use ranker::rank;
pub use scorer::{MIN_ADJUSTMENT, NEUTRAL_ADJUSTMENT, monitoring_adjustment, score_candidate};
