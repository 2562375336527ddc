//! Dewpoint comfort classification

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Temperature;

/// Perceived humidity, derived from the dewpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DewpointComfortLevel {
    /// Dewpoint in [0, 32) °F
    TooDry,
    /// Dewpoint in [32, 50) °F
    ComfortableDry,
    /// Dewpoint in [50, 60) °F
    Comfortable,
    /// Dewpoint in [60, 65) °F
    SlightlyHumid,
    /// Dewpoint in [65, 70) °F
    ModeratelyHumid,
    /// Dewpoint in [70, 75) °F
    VeryHumid,
    /// Dewpoint of 75 °F or more
    ExtremelyHumid,
    /// Dewpoint below 0 °F or not a number
    OutOfBounds,
}

impl DewpointComfortLevel {
    /// Get all levels from driest to most humid, sentinel last
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::TooDry,
            Self::ComfortableDry,
            Self::Comfortable,
            Self::SlightlyHumid,
            Self::ModeratelyHumid,
            Self::VeryHumid,
            Self::ExtremelyHumid,
            Self::OutOfBounds,
        ]
    }

    /// Stable identifier, identical to the serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooDry => "too_dry",
            Self::ComfortableDry => "comfortable_dry",
            Self::Comfortable => "comfortable",
            Self::SlightlyHumid => "slightly_humid",
            Self::ModeratelyHumid => "moderately_humid",
            Self::VeryHumid => "very_humid",
            Self::ExtremelyHumid => "extremely_humid",
            Self::OutOfBounds => "out_of_bounds",
        }
    }

    /// Check if this is the out-of-bounds sentinel
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds)
    }
}

impl fmt::Display for DewpointComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a dewpoint into a comfort level
///
/// Bands are half-open on the upper side. Dewpoints below 0 °F (and NaN)
/// are out of bounds.
///
/// # Examples
///
/// ```
/// use domain::{DewpointComfortLevel, Temperature, dewpoint_comfort};
///
/// let level = dewpoint_comfort(Temperature::from_fahrenheit(62.0));
/// assert_eq!(level, DewpointComfortLevel::SlightlyHumid);
/// ```
#[must_use]
pub fn dewpoint_comfort(dewpoint: Temperature) -> DewpointComfortLevel {
    let dp = dewpoint.fahrenheit();

    if (0.0..32.0).contains(&dp) {
        DewpointComfortLevel::TooDry
    } else if (32.0..50.0).contains(&dp) {
        DewpointComfortLevel::ComfortableDry
    } else if (50.0..60.0).contains(&dp) {
        DewpointComfortLevel::Comfortable
    } else if (60.0..65.0).contains(&dp) {
        DewpointComfortLevel::SlightlyHumid
    } else if (65.0..70.0).contains(&dp) {
        DewpointComfortLevel::ModeratelyHumid
    } else if (70.0..75.0).contains(&dp) {
        DewpointComfortLevel::VeryHumid
    } else if (75.0..).contains(&dp) {
        DewpointComfortLevel::ExtremelyHumid
    } else {
        DewpointComfortLevel::OutOfBounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(fahrenheit: f64) -> DewpointComfortLevel {
        dewpoint_comfort(Temperature::from_fahrenheit(fahrenheit))
    }

    #[test]
    fn test_band_lower_bounds_are_inclusive() {
        assert_eq!(classify(0.0), DewpointComfortLevel::TooDry);
        assert_eq!(classify(32.0), DewpointComfortLevel::ComfortableDry);
        assert_eq!(classify(50.0), DewpointComfortLevel::Comfortable);
        assert_eq!(classify(60.0), DewpointComfortLevel::SlightlyHumid);
        assert_eq!(classify(65.0), DewpointComfortLevel::ModeratelyHumid);
        assert_eq!(classify(70.0), DewpointComfortLevel::VeryHumid);
        assert_eq!(classify(75.0), DewpointComfortLevel::ExtremelyHumid);
    }

    #[test]
    fn test_band_upper_bounds_are_exclusive() {
        assert_eq!(classify(31.9), DewpointComfortLevel::TooDry);
        assert_eq!(classify(49.99), DewpointComfortLevel::ComfortableDry);
        assert_eq!(classify(59.9), DewpointComfortLevel::Comfortable);
        assert_eq!(classify(64.9), DewpointComfortLevel::SlightlyHumid);
        assert_eq!(classify(69.9), DewpointComfortLevel::ModeratelyHumid);
        assert_eq!(classify(74.9), DewpointComfortLevel::VeryHumid);
    }

    #[test]
    fn test_extremely_humid_is_unbounded() {
        assert_eq!(classify(90.0), DewpointComfortLevel::ExtremelyHumid);
        assert_eq!(classify(f64::INFINITY), DewpointComfortLevel::ExtremelyHumid);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(classify(-0.1), DewpointComfortLevel::OutOfBounds);
        assert_eq!(classify(-40.0), DewpointComfortLevel::OutOfBounds);
        assert_eq!(classify(f64::NAN), DewpointComfortLevel::OutOfBounds);
        assert!(classify(-1.0).is_out_of_bounds());
    }

    #[test]
    fn test_converted_units_classify_in_fahrenheit() {
        // 10 °C is 50 °F
        let level = dewpoint_comfort(Temperature::from_celsius(10.0));
        assert_eq!(level, DewpointComfortLevel::Comfortable);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for level in DewpointComfortLevel::all() {
            let json = serde_json::to_string(&level).expect("serialize");
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_only_sentinel_is_out_of_bounds() {
        let sentinels: Vec<_> = DewpointComfortLevel::all()
            .into_iter()
            .filter(DewpointComfortLevel::is_out_of_bounds)
            .collect();
        assert_eq!(sentinels, vec![DewpointComfortLevel::OutOfBounds]);
    }
}
