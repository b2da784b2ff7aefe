use thiserror::Error;
use twine_solvers::equation::bisection;

use super::ModelError;

/// Errors that can occur while solving for a target coupling ratio.
#[derive(Debug, Error)]
pub enum CouplingTargetError {
    /// The heart-rate bracket is not a valid, non-empty range.
    #[error("invalid heart-rate bracket: [{hr_min}, {hr_max}] bpm")]
    InvalidBracket { hr_min: f64, hr_max: f64 },

    /// The model failed at a bracket end.
    #[error("model evaluation failed")]
    Model(#[from] ModelError),

    /// The target ratio is not reached anywhere in the bracket.
    ///
    /// Ea/Ees grows linearly with heart rate, so the target is reachable
    /// exactly when it lies between the ratios at the two ends.
    #[error("target ratio {target} lies outside [{low_ratio}, {high_ratio}]")]
    NotBracketed {
        target: f64,

        /// Coupling ratio at the lower bracket end.
        low_ratio: f64,

        /// Coupling ratio at the upper bracket end.
        high_ratio: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best coupling ratio residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
