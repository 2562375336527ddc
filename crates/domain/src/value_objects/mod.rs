//! Value Objects - Immutable, identity-less measurement primitives

mod derived_index;
mod humidity;
mod temperature;
mod wind_speed;

pub use derived_index::DerivedIndex;
pub use humidity::{HumidityScale, InvalidHumidity, RelativeHumidity};
pub use temperature::{Temperature, TemperatureUnit};
pub use wind_speed::{SpeedUnit, WindSpeed};
