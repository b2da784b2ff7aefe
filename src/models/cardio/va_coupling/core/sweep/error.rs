use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::ModelError;

/// Errors that can occur while sweeping heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SweepError {
    /// The sweep configuration does not describe a usable grid.
    #[error("invalid heart-rate grid")]
    InvalidGrid(#[from] GridError),

    /// A grid point could not be evaluated.
    ///
    /// The whole sweep fails; no partial table is returned.
    #[error("evaluation failed at {heart_rate} bpm")]
    Sample {
        /// Heart rate of the failing grid point, bpm.
        heart_rate: f64,

        /// Underlying model error.
        #[source]
        source: ModelError,
    },
}

/// Reasons a heart-rate grid is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// The lower bound is not a valid heart rate.
    #[error("lower bound is not a valid heart rate")]
    LowerBound(#[source] ConstraintError),

    /// The upper bound does not lie above the lower bound.
    #[error("upper bound {hr_max} bpm does not exceed lower bound {hr_min} bpm")]
    EmptyRange { hr_min: f64, hr_max: f64 },

    /// Fewer than two samples cannot include both endpoints.
    #[error("at least two samples are required, got {0}")]
    TooFewSamples(usize),
}
