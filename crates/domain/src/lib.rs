//! Domain layer for FuzzyWeather
//!
//! Contains the comfort classification engine: measurement value objects,
//! the wind chill and heat index calculators, and the dewpoint, wind and
//! temperature comfort classifiers. Everything here is pure and allocation
//! free, so it can be called from any thread without synchronization.

pub mod comfort;
pub mod errors;
pub mod value_objects;

pub use comfort::*;
pub use errors::DomainError;
pub use value_objects::*;
