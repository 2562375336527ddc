//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidHumidity;

/// Errors that can occur in the domain layer
///
/// The classifiers themselves never fail; these errors only arise while
/// constructing measurements from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Unit name could not be parsed
    #[error("Unknown {kind} unit: {value}")]
    UnknownUnit { kind: &'static str, value: String },

    /// Humidity value outside of its valid scale
    #[error(transparent)]
    InvalidHumidity(#[from] InvalidHumidity),
}

impl DomainError {
    /// Create an unknown unit error
    pub fn unknown_unit(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownUnit {
            kind,
            value: value.into(),
        }
    }
}
