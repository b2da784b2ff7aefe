use twine_solvers::equation::bisection;

use super::{IDEAL_COUPLING_RATIO, WedgePressure};

/// Solver configuration for matching a target coupling ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouplingTargetConfig {
    /// Coupling ratio (Ea/Ees) to reach.
    pub target_ratio: f64,

    /// Lower end of the heart-rate bracket, bpm.
    pub hr_min: f64,

    /// Upper end of the heart-rate bracket, bpm.
    pub hr_max: f64,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on heart rate, bpm.
    pub hr_tol: f64,

    /// Absolute tolerance on the coupling ratio residual.
    pub ratio_tol: f64,

    /// Wedge pressure used when scoring the solution.
    pub wedge: WedgePressure,
}

impl Default for CouplingTargetConfig {
    fn default() -> Self {
        Self {
            target_ratio: IDEAL_COUPLING_RATIO,
            hr_min: 40.0,
            hr_max: 120.0,
            max_iters: 100,
            hr_tol: 1e-12,
            ratio_tol: 1e-12,
            wedge: WedgePressure::Optimal,
        }
    }
}

impl CouplingTargetConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.hr_tol,
            x_rel_tol: 0.0,
            residual_tol: self.ratio_tol,
        }
    }
}
