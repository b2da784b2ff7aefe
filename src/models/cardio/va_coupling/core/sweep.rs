//! Heart-rate sweep and arg-max search.

mod config;
mod error;

pub use config::SweepConfig;
pub use error::{GridError, SweepError};

use tracing::debug;

use super::{Conditions, HeartRate, ModelError, SweepResult, WedgePressure, evaluate};

/// Evaluates efficiency across a heart-rate grid and locates the optimum.
///
/// Points are evaluated in ascending heart-rate order.
/// The optimum is the first point with the highest efficiency.
///
/// # Errors
///
/// Returns [`SweepError::InvalidGrid`] before evaluating anything if the grid
/// is unusable, or [`SweepError::Sample`] for the first point that fails.
pub fn sweep(conditions: &Conditions, config: &SweepConfig) -> Result<SweepResult, SweepError> {
    let grid = config.grid()?;

    let points = grid
        .into_iter()
        .map(|heart_rate| {
            evaluate(conditions, heart_rate, config.wedge).map_err(|source| SweepError::Sample {
                heart_rate: heart_rate.into_inner(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = SweepResult::new(points).ok_or(GridError::TooFewSamples(0))?;

    let optimum = result.optimal_point();
    debug!(
        svr = conditions.svr(),
        ef = conditions.ef(),
        samples = result.len(),
        heart_rate = optimum.heart_rate,
        efficiency = optimum.efficiency,
        "sweep optimum"
    );

    Ok(result)
}
