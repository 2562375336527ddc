//! Temperature value object
//!
//! Stores a temperature in degrees Fahrenheit, the scale every comfort
//! threshold is expressed in. Other scales are converted on construction.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Temperature, TemperatureUnit};
//!
//! let freezing = Temperature::from_celsius(0.0);
//! assert!((freezing.fahrenheit() - 32.0).abs() < 1e-9);
//!
//! let boiling = Temperature::new(373.15, TemperatureUnit::Kelvin);
//! assert!((boiling.fahrenheit() - 212.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

const KELVIN_OFFSET: f64 = 273.15;

/// Scale a temperature reading is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
    /// Degrees Celsius
    Celsius,
    /// Kelvin
    Kelvin,
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fahrenheit => write!(f, "fahrenheit"),
            Self::Celsius => write!(f, "celsius"),
            Self::Kelvin => write!(f, "kelvin"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "c" | "celsius" => Ok(Self::Celsius),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(DomainError::unknown_unit("temperature", s)),
        }
    }
}

/// A temperature, stored in degrees Fahrenheit
///
/// No range validation happens here: implausible readings are mapped onto
/// the classifiers' out-of-bounds levels instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Temperature {
    fahrenheit: f64,
}

impl Temperature {
    /// Create a temperature from a value in the given unit
    #[must_use]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Fahrenheit => Self::from_fahrenheit(value),
            TemperatureUnit::Celsius => Self::from_celsius(value),
            TemperatureUnit::Kelvin => Self::from_kelvin(value),
        }
    }

    /// Create a temperature from degrees Fahrenheit
    #[must_use]
    pub const fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self { fahrenheit }
    }

    /// Create a temperature from degrees Celsius
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self::from_fahrenheit(celsius.mul_add(9.0 / 5.0, 32.0))
    }

    /// Create a temperature from Kelvin
    #[must_use]
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self::from_celsius(kelvin - KELVIN_OFFSET)
    }

    /// Degrees Fahrenheit
    #[must_use]
    pub const fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }

    /// Degrees Celsius
    #[must_use]
    pub fn celsius(&self) -> f64 {
        (self.fahrenheit - 32.0) * 5.0 / 9.0
    }

    /// Kelvin
    #[must_use]
    pub fn kelvin(&self) -> f64 {
        self.celsius() + KELVIN_OFFSET
    }

    /// Value expressed in the given unit
    #[must_use]
    pub fn value_in(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => self.fahrenheit(),
            TemperatureUnit::Celsius => self.celsius(),
            TemperatureUnit::Kelvin => self.kelvin(),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.fahrenheit)
    }
}
