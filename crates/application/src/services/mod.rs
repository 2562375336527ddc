//! Application services - Use case implementations

mod comfort_service;
mod hourly_timeline;

pub use comfort_service::{ComfortReport, ComfortService, Observation};
pub use hourly_timeline::{HourlyComfort, HourlyObservation};
