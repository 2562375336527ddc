//! Derived thermal index value object
//!
//! A temperature classification is informed by at most one derived index:
//! wind chill in cold weather or heat index in hot weather. Modelling the
//! choice as a single tagged value makes supplying both impossible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The derived index accompanying a temperature, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DerivedIndex {
    /// Wind chill index in °F
    WindChill(i32),
    /// Heat index in °F
    HeatIndex(i32),
    /// No derived index applies
    #[default]
    None,
}

impl DerivedIndex {
    /// The wind chill value, if this is a wind chill index
    #[must_use]
    pub const fn wind_chill(&self) -> Option<i32> {
        match self {
            Self::WindChill(value) => Some(*value),
            _ => None,
        }
    }

    /// The heat index value, if this is a heat index
    #[must_use]
    pub const fn heat_index(&self) -> Option<i32> {
        match self {
            Self::HeatIndex(value) => Some(*value),
            _ => None,
        }
    }

    /// Check if no index is present
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for DerivedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindChill(value) => write!(f, "wind chill {value}°F"),
            Self::HeatIndex(value) => write!(f, "heat index {value}°F"),
            Self::None => write!(f, "none"),
        }
    }
}
