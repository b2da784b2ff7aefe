//! Iterative solver for a target coupling ratio.
//!
//! Finds the heart rate at which Ea/Ees equals a requested value by bisecting
//! on heart rate.
//! Ea is proportional to heart rate and Ees does not depend on it, so the
//! residual is monotonic and a sign change across the bracket guarantees a
//! unique root.

mod config;
mod error;
mod problem;

pub use config::CouplingTargetConfig;
pub use error::CouplingTargetError;

use tracing::debug;
use twine_solvers::equation::bisection;

use super::{
    Conditions, EfficiencyResult, HeartRate, IDEAL_COUPLING_RATIO, ModelError, WedgePressure,
    evaluate, heart_rate,
};

use problem::{CouplingModel, CouplingTargetProblem};

/// Solves for the heart rate at which the coupling ratio equals `config.target_ratio`.
///
/// Returns the full evaluation at that heart rate.
///
/// # Errors
///
/// Returns [`CouplingTargetError`] if the bracket is invalid or does not
/// contain the target, if the model fails, or if the solver does not converge.
pub fn coupling_target(
    conditions: &Conditions,
    config: &CouplingTargetConfig,
) -> Result<EfficiencyResult, CouplingTargetError> {
    let (hr_min, hr_max) = (config.hr_min, config.hr_max);
    if !(hr_min > 0.0 && hr_max > hr_min && hr_max.is_finite()) {
        return Err(CouplingTargetError::InvalidBracket { hr_min, hr_max });
    }

    let low = evaluate(conditions, heart_rate(hr_min)?, config.wedge)?;
    let high = evaluate(conditions, heart_rate(hr_max)?, config.wedge)?;

    let target = config.target_ratio;
    let (low_ratio, high_ratio) = (low.coupling_ratio, high.coupling_ratio);
    if (low_ratio - target) * (high_ratio - target) > 0.0 || target.is_nan() {
        return Err(CouplingTargetError::NotBracketed {
            target,
            low_ratio,
            high_ratio,
        });
    }

    let model = CouplingModel::new(conditions, config.wedge);
    let problem = CouplingTargetProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [hr_min, hr_max],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation has no coupling ratio. Treat it as above
            // target so the search moves toward lower heart rates.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(CouplingTargetError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let result = solution.snapshot.output;
    debug!(
        target,
        heart_rate = result.heart_rate,
        iters = solution.iters,
        "coupling target reached"
    );

    Ok(result)
}
