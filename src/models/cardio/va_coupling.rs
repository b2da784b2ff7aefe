//! Ventricular-arterial coupling efficiency models.
//!
//! This module provides [`twine_core::Model`] implementations that score how
//! efficiently the ventricle couples to the arterial system:
//!
//! - [`VaCoupling`]: efficiency at a single heart rate.
//! - [`VaCouplingSweep`]: efficiency across a heart-rate grid, with its optimum.
//!
//! The computation lives in the internal `core` module; its functions are
//! re-exported here for callers that don't need the [`Model`] interface.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use va_coupling_models::models::cardio::va_coupling::{Conditions, VaCoupling, heart_rate};
//!
//! let model = VaCoupling::new(Conditions::new(800.0, 0.35).unwrap());
//! let result = model.call(&heart_rate(75.0).unwrap()).unwrap();
//!
//! assert_eq!(result.diastolic_efficiency, 1.0);
//! ```

pub(crate) mod core;

use twine_core::Model;

pub use self::core::{
    ArithmeticError, Conditions, CongestionProfile, CouplingTargetConfig, CouplingTargetError,
    EfficiencyResult, Elastances, GridError, HeartRate, HemodynamicState, IDEAL_COUPLING_RATIO,
    IDEAL_HEART_RATE, Input, MAX_WEDGE_PRESSURE, MIN_WEDGE_PRESSURE, ModelError, SweepConfig,
    SweepError, SweepResult, WedgePressure, congestion_penalty, congestion_sensitivity,
    coupling_target, diastolic_efficiency, diastolic_filling_time, elastances, evaluate,
    heart_rate, mechanical_efficiency, optimal_wedge_pressure, stroke_volume, sweep,
};

/// Efficiency at a single heart rate for fixed conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaCoupling {
    /// SVR and EF held fixed across calls.
    pub conditions: Conditions,

    /// Wedge pressure at which congestion is scored.
    pub wedge: WedgePressure,
}

impl VaCoupling {
    /// Creates a model that evaluates congestion at the optimal wedge pressure.
    #[must_use]
    pub fn new(conditions: Conditions) -> Self {
        Self {
            conditions,
            wedge: WedgePressure::Optimal,
        }
    }

    /// Returns a copy that evaluates congestion at `wedge`.
    #[must_use]
    pub fn with_wedge(self, wedge: WedgePressure) -> Self {
        Self { wedge, ..self }
    }

    /// Solves for the heart rate that reaches a target coupling ratio.
    ///
    /// The configured wedge pressure overrides `config.wedge`.
    ///
    /// # Errors
    ///
    /// See [`coupling_target`].
    pub fn coupling_target(
        &self,
        config: &CouplingTargetConfig,
    ) -> Result<EfficiencyResult, CouplingTargetError> {
        let config = CouplingTargetConfig {
            wedge: self.wedge,
            ..*config
        };
        coupling_target(&self.conditions, &config)
    }
}

impl Model for VaCoupling {
    type Input = HeartRate;
    type Output = EfficiencyResult;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(&self.conditions, *input, self.wedge)
    }
}

/// Heart-rate sweep over a fixed grid; the input is the (SVR, EF) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VaCouplingSweep {
    /// Heart-rate grid and wedge pressure.
    pub config: SweepConfig,
}

impl VaCouplingSweep {
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }
}

impl Model for VaCouplingSweep {
    type Input = Conditions;
    type Output = SweepResult;
    type Error = SweepError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        sweep(input, &self.config)
    }
}
