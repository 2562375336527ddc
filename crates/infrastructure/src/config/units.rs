//! Measurement unit preferences for raw input values.

use domain::{HumidityScale, SpeedUnit, TemperatureUnit};
use serde::{Deserialize, Serialize};

/// Units raw readings are supplied in
///
/// Only affects how input is interpreted. Classification always runs on
/// °F and mph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Unit for air and dewpoint temperatures (default: fahrenheit)
    #[serde(default)]
    pub temperature: TemperatureUnit,

    /// Unit for wind speeds (default: mph)
    #[serde(default)]
    pub wind_speed: SpeedUnit,

    /// Scale for relative humidity (default: percent)
    #[serde(default)]
    pub humidity: HumidityScale,
}
