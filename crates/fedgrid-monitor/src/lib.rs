//! fedgrid-monitor — best-effort provider telemetry.
//!
//! The third pipeline stage. Telemetry is strictly optional: the gateway
//! can be disabled outright, individual providers can fail or time out,
//! and none of that ever fails a ranking call. Absent samples rank with a
//! neutral adjustment.
//!
//! # Components
//!
//! - **`source`** — `MonitoringSource` trait, raw metrics DTOs, HTTP client
//! - **`gateway`** — concurrent fan-out with per-provider and global timeouts

pub mod error;
pub mod gateway;
pub mod source;

pub use error::{MonitorError, MonitorResult};
pub use gateway::{DEFAULT_GLOBAL_TIMEOUT, DEFAULT_PROVIDER_TIMEOUT, MonitoringGateway};
pub use source::{HttpMonitoringSource, MonitoringSource, RawMachine, RawProviderMetrics};
