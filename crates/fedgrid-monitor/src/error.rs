//! Monitoring error types.

use thiserror::Error;

/// Result type alias for monitoring operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors that can occur while fetching provider telemetry.
///
/// Individual provider failures are not represented here — they degrade
/// to an absent sample inside the gateway and never abort a batch.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Malformed input (blank provider id). A caller bug, surfaced
    /// immediately.
    #[error("invalid monitoring request: {0}")]
    Configuration(String),

    /// The telemetry endpoint for one provider could not be queried.
    /// Raised by sources, swallowed by the gateway.
    #[error("monitoring source unavailable: {0}")]
    Unavailable(String),
}
