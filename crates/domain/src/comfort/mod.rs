//! Comfort classification engine
//!
//! Index calculators turn raw observations into wind chill and heat index
//! values; classifiers map a single measurement (plus, for temperature, a
//! derived index) onto an ordered comfort level. Out-of-domain inputs map
//! onto each enum's sentinel variant instead of failing.

mod dewpoint;
mod indices;
mod temperature;
mod wind;

pub use dewpoint::{DewpointComfortLevel, dewpoint_comfort};
pub use indices::{heat_index, wind_chill};
pub use temperature::{
    HEAT_INDEX_MIN_TEMPERATURE_F, TemperatureComfortLevel, ThermalRegime,
    WIND_CHILL_MAX_TEMPERATURE_F, temperature_comfort,
};
pub use wind::{WindComfortLevel, wind_comfort};
