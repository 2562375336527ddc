//! Wind comfort classification (Beaufort-derived bands)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::WindSpeed;

/// Perceived wind level, following the Beaufort scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindComfortLevel {
    /// Exactly 0 mph (Beaufort 0)
    Calm,
    /// [1, 4) mph (Beaufort 1)
    LightAir,
    /// [4, 8) mph (Beaufort 2)
    LightBreeze,
    /// [8, 13) mph (Beaufort 3)
    GentleBreeze,
    /// [13, 19) mph (Beaufort 4)
    ModerateBreeze,
    /// [19, 25) mph (Beaufort 5)
    FreshBreeze,
    /// [25, 32) mph (Beaufort 6)
    StrongBreeze,
    /// [32, 39) mph (Beaufort 7)
    NearGale,
    /// [39, 47) mph (Beaufort 8)
    Gale,
    /// [47, 55) mph (Beaufort 9)
    StrongGale,
    /// [55, 64) mph (Beaufort 10)
    WholeGale,
    /// [64, 75) mph (Beaufort 11)
    StormForce,
    /// 75 mph or more (Beaufort 12)
    HurricaneForce,
    /// Negative, NaN, or between calm and light air
    OutOfBounds,
}

/// Lower bound (mph, inclusive) of every band above calm
const BANDS: [(f64, WindComfortLevel); 12] = [
    (75.0, WindComfortLevel::HurricaneForce),
    (64.0, WindComfortLevel::StormForce),
    (55.0, WindComfortLevel::WholeGale),
    (47.0, WindComfortLevel::StrongGale),
    (39.0, WindComfortLevel::Gale),
    (32.0, WindComfortLevel::NearGale),
    (25.0, WindComfortLevel::StrongBreeze),
    (19.0, WindComfortLevel::FreshBreeze),
    (13.0, WindComfortLevel::ModerateBreeze),
    (8.0, WindComfortLevel::GentleBreeze),
    (4.0, WindComfortLevel::LightBreeze),
    (1.0, WindComfortLevel::LightAir),
];

impl WindComfortLevel {
    /// Get all levels from calm to hurricane force, sentinel last
    #[must_use]
    pub const fn all() -> [Self; 14] {
        [
            Self::Calm,
            Self::LightAir,
            Self::LightBreeze,
            Self::GentleBreeze,
            Self::ModerateBreeze,
            Self::FreshBreeze,
            Self::StrongBreeze,
            Self::NearGale,
            Self::Gale,
            Self::StrongGale,
            Self::WholeGale,
            Self::StormForce,
            Self::HurricaneForce,
            Self::OutOfBounds,
        ]
    }

    /// Beaufort number (0-12), `None` for the sentinel
    #[must_use]
    pub const fn beaufort_number(&self) -> Option<u8> {
        match self {
            Self::Calm => Some(0),
            Self::LightAir => Some(1),
            Self::LightBreeze => Some(2),
            Self::GentleBreeze => Some(3),
            Self::ModerateBreeze => Some(4),
            Self::FreshBreeze => Some(5),
            Self::StrongBreeze => Some(6),
            Self::NearGale => Some(7),
            Self::Gale => Some(8),
            Self::StrongGale => Some(9),
            Self::WholeGale => Some(10),
            Self::StormForce => Some(11),
            Self::HurricaneForce => Some(12),
            Self::OutOfBounds => None,
        }
    }

    /// Stable identifier, identical to the serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::LightAir => "light_air",
            Self::LightBreeze => "light_breeze",
            Self::GentleBreeze => "gentle_breeze",
            Self::ModerateBreeze => "moderate_breeze",
            Self::FreshBreeze => "fresh_breeze",
            Self::StrongBreeze => "strong_breeze",
            Self::NearGale => "near_gale",
            Self::Gale => "gale",
            Self::StrongGale => "strong_gale",
            Self::WholeGale => "whole_gale",
            Self::StormForce => "storm_force",
            Self::HurricaneForce => "hurricane_force",
            Self::OutOfBounds => "out_of_bounds",
        }
    }

    /// Check if this is the out-of-bounds sentinel
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds)
    }
}

impl fmt::Display for WindComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a wind speed into a comfort level
///
/// Calm matches exactly 0 mph. Every other band is half-open on the upper
/// side, starting at 1 mph, so speeds strictly between 0 and 1 mph fall
/// outside all bands and are reported as out of bounds, as are negative
/// speeds and NaN.
///
/// # Examples
///
/// ```
/// use domain::{WindComfortLevel, WindSpeed, wind_comfort};
///
/// assert_eq!(wind_comfort(WindSpeed::from_mph(10.0)), WindComfortLevel::GentleBreeze);
/// assert_eq!(wind_comfort(WindSpeed::from_mph(-1.0)), WindComfortLevel::OutOfBounds);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn wind_comfort(wind: WindSpeed) -> WindComfortLevel {
    let mph = wind.mph();

    if mph == 0.0 {
        return WindComfortLevel::Calm;
    }

    BANDS
        .iter()
        .find(|(lower, _)| mph >= *lower)
        .map_or(WindComfortLevel::OutOfBounds, |(_, level)| *level)
}
