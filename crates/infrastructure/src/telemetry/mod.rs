//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber used by the binaries.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
