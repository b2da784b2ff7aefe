//! Ventricular-arterial coupling efficiency as a function of heart rate.
//!
//! The computation is a one-way pipeline:
//!
//! 1. [`hemodynamics`] maps (heart rate, SVR, EF) to stroke volume, cardiac
//!    output, mean arterial pressure and the two elastances (Ea, Ees).
//! 2. [`congestion`] derives the optimal wedge pressure and an asymmetric
//!    filling-pressure penalty.
//! 3. [`evaluate`] folds both into a 0–100 efficiency score built from
//!    Gaussian sub-scores.
//! 4. [`sweep`] evaluates a heart-rate grid and reports the arg-max, and
//!    [`coupling_target`] root-finds the heart rate that hits a given Ea/Ees.
//!
//! Every function here is pure; nothing is cached between calls.

mod conditions;
mod congestion;
mod coupling_target;
mod efficiency;
mod error;
mod hemodynamics;
mod results;
mod sweep;

#[cfg(test)]
mod test_support;

pub use conditions::{Conditions, HeartRate, WedgePressure, heart_rate};
pub use congestion::{
    CongestionProfile, MAX_WEDGE_PRESSURE, MIN_WEDGE_PRESSURE, congestion_penalty,
    congestion_sensitivity, optimal_wedge_pressure,
};
pub use coupling_target::{CouplingTargetConfig, CouplingTargetError, coupling_target};
pub use efficiency::{
    IDEAL_COUPLING_RATIO, IDEAL_HEART_RATE, diastolic_efficiency, evaluate, mechanical_efficiency,
};
pub use error::{ArithmeticError, Input, ModelError};
pub use hemodynamics::{
    Elastances, HemodynamicState, diastolic_filling_time, elastances, stroke_volume,
};
pub use results::{EfficiencyResult, SweepResult};
pub use sweep::{GridError, SweepConfig, SweepError, sweep};
