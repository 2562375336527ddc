//! Relative humidity value object
//!
//! Represents a validated relative humidity, stored as a fraction in [0, 1].
//! Readings are often reported as a percentage instead; both scales are
//! accepted at construction so that callers cannot mix them up later.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::RelativeHumidity;
//!
//! let h = RelativeHumidity::from_percent(65.0).expect("valid humidity");
//! assert!((h.fraction() - 0.65).abs() < 1e-9);
//!
//! // Invalid values return an error
//! assert!(RelativeHumidity::from_fraction(1.5).is_err());
//!
//! // Clamp out-of-range values
//! let clamped = RelativeHumidity::clamped_fraction(1.5);
//! assert!((clamped.fraction() - 1.0).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::errors::DomainError;

/// Scale a humidity reading is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumidityScale {
    /// Fraction in [0, 1]
    Fraction,
    /// Percentage in [0, 100]
    #[default]
    Percent,
}

impl HumidityScale {
    const fn max(self) -> f64 {
        match self {
            Self::Fraction => 1.0,
            Self::Percent => 100.0,
        }
    }

    const fn range(self) -> &'static str {
        match self {
            Self::Fraction => "0-1",
            Self::Percent => "0-100%",
        }
    }
}

impl fmt::Display for HumidityScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction => write!(f, "fraction"),
            Self::Percent => write!(f, "percent"),
        }
    }
}

impl FromStr for HumidityScale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fraction" => Ok(Self::Fraction),
            "percent" | "%" => Ok(Self::Percent),
            _ => Err(DomainError::unknown_unit("humidity", s)),
        }
    }
}

/// Error returned when a humidity value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid humidity: {value} is out of range (must be {})", .scale.range())]
pub struct InvalidHumidity {
    value: f64,
    scale: HumidityScale,
}

impl InvalidHumidity {
    /// The rejected value, in the scale it was supplied in
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Relative humidity, stored as a fraction in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct RelativeHumidity(f64);

impl RelativeHumidity {
    /// Create a humidity from a reading in the given scale
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` if the value is NaN or outside the scale.
    pub fn new(value: f64, scale: HumidityScale) -> Result<Self, InvalidHumidity> {
        if !(0.0..=scale.max()).contains(&value) {
            return Err(InvalidHumidity { value, scale });
        }
        Ok(Self(value / scale.max()))
    }

    /// Create a humidity from a fraction in [0, 1]
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::RelativeHumidity;
    ///
    /// assert!(RelativeHumidity::from_fraction(0.0).is_ok());
    /// assert!(RelativeHumidity::from_fraction(1.0).is_ok());
    /// assert!(RelativeHumidity::from_fraction(f64::NAN).is_err());
    /// ```
    pub fn from_fraction(fraction: f64) -> Result<Self, InvalidHumidity> {
        Self::new(fraction, HumidityScale::Fraction)
    }

    /// Create a humidity from a percentage in [0, 100]
    pub fn from_percent(percent: f64) -> Result<Self, InvalidHumidity> {
        Self::new(percent, HumidityScale::Percent)
    }

    /// Create a humidity from a fraction, clamping to [0, 1]
    ///
    /// NaN clamps to 0.
    #[must_use]
    pub fn clamped_fraction(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Humidity as a fraction in [0, 1]
    #[must_use]
    pub const fn fraction(self) -> f64 {
        self.0
    }

    /// Humidity as a percentage in [0, 100]
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for RelativeHumidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.percent())
    }
}

impl TryFrom<f64> for RelativeHumidity {
    type Error = InvalidHumidity;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::from_fraction(fraction)
    }
}

impl From<RelativeHumidity> for f64 {
    fn from(h: RelativeHumidity) -> Self {
        h.0
    }
}

/// Custom deserialization that validates the fraction
impl<'de> Deserialize<'de> for RelativeHumidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::from_fraction(value).map_err(serde::de::Error::custom)
    }
}
