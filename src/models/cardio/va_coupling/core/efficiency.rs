//! Composite efficiency score.

use tracing::{debug, trace};

use super::{
    Conditions, CongestionProfile, EfficiencyResult, HeartRate, ModelError, WedgePressure,
    elastances,
};

/// Coupling ratio at which mechanical efficiency peaks.
pub const IDEAL_COUPLING_RATIO: f64 = 0.8;

/// Width of the mechanical efficiency Gaussian.
const COUPLING_WIDTH: f64 = 0.4;

/// Heart rate at which diastolic efficiency peaks, bpm.
pub const IDEAL_HEART_RATE: f64 = 75.0;

/// Standard deviation of the diastolic efficiency Gaussian, bpm.
const HEART_RATE_SPREAD: f64 = 30.0;

/// Mechanical efficiency in `(0, 1]`, peaking at [`IDEAL_COUPLING_RATIO`].
#[must_use]
pub fn mechanical_efficiency(coupling_ratio: f64) -> f64 {
    (-((coupling_ratio - IDEAL_COUPLING_RATIO) / COUPLING_WIDTH).powi(2)).exp()
}

/// Diastolic efficiency in `(0, 1]`, peaking at [`IDEAL_HEART_RATE`].
#[must_use]
pub fn diastolic_efficiency(heart_rate: f64) -> f64 {
    (-0.5 * ((heart_rate - IDEAL_HEART_RATE) / HEART_RATE_SPREAD).powi(2)).exp()
}

/// Evaluates the efficiency score at one heart rate.
///
/// The score is `mechanical · diastolic · (1 − congestion) · 100`, floored at zero.
/// With [`WedgePressure::Optimal`] the congestion term is always zero.
///
/// # Errors
///
/// Returns [`ModelError::Arithmetic`] if the elastances cannot be computed.
pub fn evaluate(
    conditions: &Conditions,
    heart_rate: HeartRate,
    wedge: WedgePressure,
) -> Result<EfficiencyResult, ModelError> {
    let heart_rate = heart_rate.into_inner();
    let (svr, ef) = (conditions.svr(), conditions.ef());

    let e = elastances(heart_rate, svr, ef)?;
    let coupling_ratio = e.coupling_ratio();

    let congestion = CongestionProfile::new(heart_rate, svr, ef);
    let optimal_wedge_pressure = congestion.optimal_wedge_pressure();
    let congestion_penalty = congestion.penalty(match wedge {
        WedgePressure::Optimal => optimal_wedge_pressure,
        WedgePressure::Measured(wedge) => wedge.into_inner(),
    });

    let mechanical_efficiency = mechanical_efficiency(coupling_ratio);
    let diastolic_efficiency = diastolic_efficiency(heart_rate);

    // Saturate before multiplying: an infinite penalty times an underflowed
    // sub-score would otherwise be NaN.
    let congestion_factor = (1.0 - congestion_penalty).max(0.0);
    if congestion_factor == 0.0 {
        debug!(
            heart_rate,
            congestion_penalty, "congestion penalty exceeds unity, flooring efficiency at zero"
        );
    }

    let efficiency = mechanical_efficiency * diastolic_efficiency * congestion_factor * 100.0;

    trace!(heart_rate, efficiency, coupling_ratio, "evaluated");

    Ok(EfficiencyResult {
        heart_rate,
        efficiency,
        coupling_ratio,
        stroke_volume: e.stroke_volume,
        cardiac_output: e.cardiac_output,
        mean_arterial_pressure: e.mean_arterial_pressure,
        optimal_wedge_pressure,
        mechanical_efficiency,
        diastolic_efficiency,
        congestion_penalty,
    })
}
