//! Temperature comfort classification
//!
//! Three disjoint regimes are modelled. Below 50 °F the wind chill decides,
//! above 72 °F the heat index decides, and in between the raw temperature
//! does. The regime checks run first and the neutral bands last; anything
//! left over becomes [`TemperatureComfortLevel::TemperatureOutsideReasonableBounds`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{DerivedIndex, Temperature};

/// Temperatures strictly below this use the wind chill bands
pub const WIND_CHILL_MAX_TEMPERATURE_F: f64 = 50.0;

/// Temperatures strictly above this use the heat index bands
pub const HEAT_INDEX_MIN_TEMPERATURE_F: f64 = 72.0;

/// Temperature regime a comfort level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalRegime {
    /// Winter weather, classified by wind chill
    Cold,
    /// Mild weather, classified by temperature alone
    Neutral,
    /// Summer weather, classified by heat index
    Hot,
}

/// Perceived thermal comfort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureComfortLevel {
    /// Wind chill below -60
    ExtremeDangerousCold,
    /// Wind chill in [-60, -35]
    VeryDangerousCold,
    /// Wind chill in (-35, -19]
    ModeratelyDangerousCold,
    /// Wind chill in (-19, 0)
    SlightlyDangerousCold,
    /// Wind chill in [0, 36] with temperature below freezing
    SafeUnderFreezing,
    /// Wind chill in [0, 36] with temperature at or above freezing
    SnowMelting,
    /// Temperature in [50, 60]
    Cool,
    /// Temperature in (60, 65]
    LukeWarm,
    /// Temperature in (65, 72]
    RoomTemp,
    /// Heat index below 80
    SafeWarm,
    /// Heat index in [80, 90]
    CautionHot,
    /// Heat index in (90, 102]
    ExtremeCautionHot,
    /// Heat index in (102, 124]
    DangerHot,
    /// Heat index above 124
    ExtremeDangerHot,
    /// Inputs did not fit any regime
    TemperatureOutsideReasonableBounds,
}

impl TemperatureComfortLevel {
    /// Get all levels from coldest to hottest, sentinel last
    #[must_use]
    pub const fn all() -> [Self; 15] {
        [
            Self::ExtremeDangerousCold,
            Self::VeryDangerousCold,
            Self::ModeratelyDangerousCold,
            Self::SlightlyDangerousCold,
            Self::SafeUnderFreezing,
            Self::SnowMelting,
            Self::Cool,
            Self::LukeWarm,
            Self::RoomTemp,
            Self::SafeWarm,
            Self::CautionHot,
            Self::ExtremeCautionHot,
            Self::DangerHot,
            Self::ExtremeDangerHot,
            Self::TemperatureOutsideReasonableBounds,
        ]
    }

    /// The regime this level belongs to, `None` for the sentinel
    #[must_use]
    pub const fn regime(&self) -> Option<ThermalRegime> {
        match self {
            Self::ExtremeDangerousCold
            | Self::VeryDangerousCold
            | Self::ModeratelyDangerousCold
            | Self::SlightlyDangerousCold
            | Self::SafeUnderFreezing
            | Self::SnowMelting => Some(ThermalRegime::Cold),
            Self::Cool | Self::LukeWarm | Self::RoomTemp => Some(ThermalRegime::Neutral),
            Self::SafeWarm
            | Self::CautionHot
            | Self::ExtremeCautionHot
            | Self::DangerHot
            | Self::ExtremeDangerHot => Some(ThermalRegime::Hot),
            Self::TemperatureOutsideReasonableBounds => None,
        }
    }

    /// Stable identifier, identical to the serialized name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtremeDangerousCold => "extreme_dangerous_cold",
            Self::VeryDangerousCold => "very_dangerous_cold",
            Self::ModeratelyDangerousCold => "moderately_dangerous_cold",
            Self::SlightlyDangerousCold => "slightly_dangerous_cold",
            Self::SafeUnderFreezing => "safe_under_freezing",
            Self::SnowMelting => "snow_melting",
            Self::Cool => "cool",
            Self::LukeWarm => "luke_warm",
            Self::RoomTemp => "room_temp",
            Self::SafeWarm => "safe_warm",
            Self::CautionHot => "caution_hot",
            Self::ExtremeCautionHot => "extreme_caution_hot",
            Self::DangerHot => "danger_hot",
            Self::ExtremeDangerHot => "extreme_danger_hot",
            Self::TemperatureOutsideReasonableBounds => "temperature_outside_reasonable_bounds",
        }
    }

    /// Check if this is the out-of-bounds sentinel
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::TemperatureOutsideReasonableBounds)
    }
}

impl fmt::Display for TemperatureComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a temperature, informed by at most one derived index
///
/// Dispatch order:
/// 1. A wind chill with temperature below 50 °F uses the wind chill bands.
///    A wind chill above 36 matches no band and falls through.
/// 2. A heat index with temperature above 72 °F uses the heat index bands.
/// 3. Otherwise the raw temperature is matched against the neutral bands.
/// 4. Anything left is `TemperatureOutsideReasonableBounds`, e.g. a cold
///    temperature supplied without a wind chill.
///
/// # Examples
///
/// ```
/// use domain::{DerivedIndex, Temperature, TemperatureComfortLevel, temperature_comfort};
///
/// let level = temperature_comfort(Temperature::from_fahrenheit(40.0), DerivedIndex::WindChill(-70));
/// assert_eq!(level, TemperatureComfortLevel::ExtremeDangerousCold);
///
/// let level = temperature_comfort(Temperature::from_fahrenheit(40.0), DerivedIndex::None);
/// assert_eq!(level, TemperatureComfortLevel::TemperatureOutsideReasonableBounds);
/// ```
#[must_use]
pub fn temperature_comfort(temperature: Temperature, index: DerivedIndex) -> TemperatureComfortLevel {
    let t = temperature.fahrenheit();

    let regime_level = match index {
        DerivedIndex::WindChill(wc) if t < WIND_CHILL_MAX_TEMPERATURE_F => {
            classify_wind_chill(wc, t)
        },
        DerivedIndex::HeatIndex(hi) if t > HEAT_INDEX_MIN_TEMPERATURE_F => {
            Some(classify_heat_index(hi))
        },
        _ => None,
    };

    regime_level
        .or_else(|| classify_neutral(t))
        .unwrap_or(TemperatureComfortLevel::TemperatureOutsideReasonableBounds)
}

fn classify_wind_chill(wind_chill: i32, fahrenheit: f64) -> Option<TemperatureComfortLevel> {
    match wind_chill {
        ..=-61 => Some(TemperatureComfortLevel::ExtremeDangerousCold),
        -60..=-35 => Some(TemperatureComfortLevel::VeryDangerousCold),
        -34..=-19 => Some(TemperatureComfortLevel::ModeratelyDangerousCold),
        -18..=-1 => Some(TemperatureComfortLevel::SlightlyDangerousCold),
        0..=36 if fahrenheit < 32.0 => Some(TemperatureComfortLevel::SafeUnderFreezing),
        0..=36 => Some(TemperatureComfortLevel::SnowMelting),
        _ => None,
    }
}

const fn classify_heat_index(heat_index: i32) -> TemperatureComfortLevel {
    match heat_index {
        ..=79 => TemperatureComfortLevel::SafeWarm,
        80..=90 => TemperatureComfortLevel::CautionHot,
        91..=102 => TemperatureComfortLevel::ExtremeCautionHot,
        103..=124 => TemperatureComfortLevel::DangerHot,
        _ => TemperatureComfortLevel::ExtremeDangerHot,
    }
}

fn classify_neutral(fahrenheit: f64) -> Option<TemperatureComfortLevel> {
    if (50.0..=60.0).contains(&fahrenheit) {
        Some(TemperatureComfortLevel::Cool)
    } else if fahrenheit > 60.0 && fahrenheit <= 65.0 {
        Some(TemperatureComfortLevel::LukeWarm)
    } else if fahrenheit > 65.0 && fahrenheit <= 72.0 {
        Some(TemperatureComfortLevel::RoomTemp)
    } else {
        None
    }
}
