//! Infrastructure layer - Configuration and logging
//!
//! Loads application configuration from files and the environment and
//! installs the global tracing subscriber.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, UnitsConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
