use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Identifies a model input in a [`ModelError::Domain`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Heart rate, bpm.
    HeartRate,

    /// Systemic vascular resistance, dyn·s/cm⁵.
    Svr,

    /// Ejection fraction, as a fraction.
    EjectionFraction,

    /// Measured wedge pressure, mmHg.
    WedgePressure,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Input::HeartRate => "heart rate",
            Input::Svr => "systemic vascular resistance",
            Input::EjectionFraction => "ejection fraction",
            Input::WedgePressure => "wedge pressure",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while evaluating the coupling model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ModelError {
    /// An input lies outside its physiologically valid range.
    ///
    /// Raised at construction, before any formula is evaluated.
    #[error("{input} is outside its valid domain")]
    Domain {
        /// The offending input.
        input: Input,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A formula hit a division by zero.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl ModelError {
    /// Creates a domain error for `input`.
    pub(super) fn domain(input: Input) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Domain { input, source }
    }
}

/// Divisions the model must refuse rather than propagate as `inf` or `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticError {
    /// Arterial elastance divides by stroke volume.
    #[error("stroke volume is not strictly positive: {stroke_volume} mL")]
    NonPositiveStrokeVolume {
        /// The stroke volume that was computed, in mL.
        stroke_volume: f64,
    },

    /// The coupling ratio divides by end-systolic elastance.
    #[error("end-systolic elastance evaluated to zero")]
    ZeroEndSystolicElastance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_names_the_input() {
        let err = ModelError::domain(Input::EjectionFraction)(ConstraintError::AboveMaximum);
        assert_eq!(err.to_string(), "ejection fraction is outside its valid domain");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn arithmetic_error_is_transparent() {
        let err = ModelError::from(ArithmeticError::ZeroEndSystolicElastance);
        assert_eq!(err.to_string(), "end-systolic elastance evaluated to zero");
    }
}
