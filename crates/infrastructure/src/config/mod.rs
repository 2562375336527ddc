//! Application configuration
//!
//! Split into focused sub-modules:
//! - `units`: units raw readings are supplied in
//!
//! Logging settings live next to the subscriber in [`crate::telemetry`].

mod units;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use units::UnitsConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "FUZZYWEATHER";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input unit preferences
    #[serde(default)]
    pub units: UnitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, lowest precedence first: built-in defaults, `config.toml`
    /// in the working directory (optional), then environment variables
    /// such as `FUZZYWEATHER_UNITS__TEMPERATURE=celsius`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false));

        Self::finish(builder, Self::environment())
    }

    /// Load configuration from an explicit file plus environment overrides
    ///
    /// Unlike [`AppConfig::load`], the file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");

        let builder = Self::defaults()?.add_source(config::File::from(path));

        Self::finish(builder, Self::environment())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("units.temperature", "fahrenheit")?
            .set_default("units.wind_speed", "mph")?
            .set_default("units.humidity", "percent")?
            .set_default("telemetry.log_filter", "warn")?
            .set_default("telemetry.format", "pretty")
    }

    /// Environment overrides, e.g. `FUZZYWEATHER_TELEMETRY__FORMAT=json`
    ///
    /// Nested keys are joined with `__` since field names such as
    /// `wind_speed` already contain underscores.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let config = builder.add_source(environment).build()?;
        config.try_deserialize()
    }
}
