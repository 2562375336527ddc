//! Wind speed value object
//!
//! Stores a wind speed in miles per hour, the unit of every wind threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

const KMH_PER_MPH: f64 = 1.609_344;
const MS_PER_MPH: f64 = 0.447_04;
const KNOTS_PER_MPH: f64 = 0.868_976_241_9;

/// Unit a wind speed reading is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    /// Miles per hour
    #[default]
    Mph,
    /// Kilometres per hour
    Kmh,
    /// Metres per second
    MetersPerSecond,
    /// Nautical miles per hour
    Knots,
}

impl SpeedUnit {
    /// How many of this unit make up one mile per hour
    const fn per_mph(self) -> f64 {
        match self {
            Self::Mph => 1.0,
            Self::Kmh => KMH_PER_MPH,
            Self::MetersPerSecond => MS_PER_MPH,
            Self::Knots => KNOTS_PER_MPH,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mph => write!(f, "mph"),
            Self::Kmh => write!(f, "kmh"),
            Self::MetersPerSecond => write!(f, "meters_per_second"),
            Self::Knots => write!(f, "knots"),
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mph" => Ok(Self::Mph),
            "kmh" | "km/h" | "kph" => Ok(Self::Kmh),
            "ms" | "m/s" | "meters_per_second" => Ok(Self::MetersPerSecond),
            "kn" | "kt" | "knots" => Ok(Self::Knots),
            _ => Err(DomainError::unknown_unit("wind speed", s)),
        }
    }
}

/// A wind speed, stored in miles per hour
///
/// Negative speeds are representable on purpose: the wind classifier
/// reports them as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct WindSpeed {
    mph: f64,
}

impl WindSpeed {
    /// Still air
    pub const CALM: Self = Self::from_mph(0.0);

    /// Create a wind speed from a value in the given unit
    #[must_use]
    pub fn new(value: f64, unit: SpeedUnit) -> Self {
        Self::from_mph(value / unit.per_mph())
    }

    /// Create a wind speed from miles per hour
    #[must_use]
    pub const fn from_mph(mph: f64) -> Self {
        Self { mph }
    }

    /// Create a wind speed from kilometres per hour
    #[must_use]
    pub fn from_kmh(kmh: f64) -> Self {
        Self::new(kmh, SpeedUnit::Kmh)
    }

    /// Create a wind speed from metres per second
    #[must_use]
    pub fn from_meters_per_second(ms: f64) -> Self {
        Self::new(ms, SpeedUnit::MetersPerSecond)
    }

    /// Create a wind speed from knots
    #[must_use]
    pub fn from_knots(knots: f64) -> Self {
        Self::new(knots, SpeedUnit::Knots)
    }

    /// Miles per hour
    #[must_use]
    pub const fn mph(&self) -> f64 {
        self.mph
    }

    /// Value expressed in the given unit
    #[must_use]
    pub fn value_in(&self, unit: SpeedUnit) -> f64 {
        self.mph * unit.per_mph()
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mph", self.mph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_metric_conversions() {
        assert!(approx(WindSpeed::from_kmh(1.609_344).mph(), 1.0));
        assert!(approx(WindSpeed::from_meters_per_second(10.0).mph(), 22.369_362_9));
        assert!(approx(WindSpeed::from_knots(10.0).mph(), 11.507_794_5));
    }

    #[test]
    fn test_value_in_inverts_new() {
        for unit in [
            SpeedUnit::Mph,
            SpeedUnit::Kmh,
            SpeedUnit::MetersPerSecond,
            SpeedUnit::Knots,
        ] {
            assert!(approx(WindSpeed::new(42.0, unit).value_in(unit), 42.0));
        }
    }

    #[test]
    fn test_calm_constant() {
        assert!(WindSpeed::CALM.mph().abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_speed_is_representable() {
        assert!(WindSpeed::from_mph(-3.0).mph() < 0.0);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("MPH".parse::<SpeedUnit>(), Ok(SpeedUnit::Mph));
        assert_eq!("km/h".parse::<SpeedUnit>(), Ok(SpeedUnit::Kmh));
        assert_eq!("m/s".parse::<SpeedUnit>(), Ok(SpeedUnit::MetersPerSecond));
        assert_eq!("kt".parse::<SpeedUnit>(), Ok(SpeedUnit::Knots));
        assert_eq!(
            "furlongs".parse::<SpeedUnit>(),
            Err(DomainError::unknown_unit("wind speed", "furlongs"))
        );
    }

    #[test]
    fn test_unit_display_roundtrips_through_from_str() {
        for unit in [
            SpeedUnit::Mph,
            SpeedUnit::Kmh,
            SpeedUnit::MetersPerSecond,
            SpeedUnit::Knots,
        ] {
            assert_eq!(unit.to_string().parse::<SpeedUnit>(), Ok(unit));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(WindSpeed::from_mph(12.34).to_string(), "12.3 mph");
    }
}
