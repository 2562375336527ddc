//! Application layer - Use cases and orchestration
//!
//! Decides which derived index applies to an observation and runs the
//! domain classifiers over single observations or hourly series.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
