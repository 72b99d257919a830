//! Equation-of-state errors.

use srk_core::CoreError;
use thiserror::Error;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while evaluating or inverting the equation of state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Property lookup failed; no constants are available for the name.
    #[error("Unknown substance: {name}")]
    UnknownSubstance { name: String },

    /// Every candidate root of the cubic fell at or below the admissibility threshold.
    #[error("No physical root at T = {temperature_k} K, P = {pressure_bar} bar")]
    NoPhysicalRoot {
        temperature_k: f64,
        pressure_bar: f64,
    },

    /// An intermediate quantity left the domain of the closed-form expression
    /// (acos argument, square root of a negative, division by zero).
    #[error("Numeric domain error: {what}")]
    NumericDomain { what: &'static str },

    /// Non-physical input (non-positive temperature, pressure, critical constant).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Non-finite input or intermediate value.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<CoreError> for EosError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => EosError::NonFinite { what, value },
            CoreError::InvalidArg { what } => EosError::NonPhysical { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::UnknownSubstance {
            name: "Unobtainium".into(),
        };
        assert!(err.to_string().contains("Unobtainium"));

        let err = EosError::NoPhysicalRoot {
            temperature_k: 300.0,
            pressure_bar: 1e-6,
        };
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn core_error_conversion() {
        let err: EosError = CoreError::InvalidArg {
            what: "critical temperature",
        }
        .into();
        assert_eq!(
            err,
            EosError::NonPhysical {
                what: "critical temperature"
            }
        );

        let err: EosError = CoreError::NonFinite {
            what: "pressure",
            value: f64::INFINITY,
        }
        .into();
        assert!(matches!(err, EosError::NonFinite { what: "pressure", .. }));
    }
}
