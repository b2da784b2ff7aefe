//! Problem formulation for coupling ratio matching.

use twine_core::{EquationProblem, Model};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::{Conditions, EfficiencyResult, HeartRate, ModelError, WedgePressure, evaluate};

/// Model adapter exposing heart rate as the sole input.
pub(super) struct CouplingModel<'a> {
    conditions: &'a Conditions,
    wedge: WedgePressure,
}

impl<'a> CouplingModel<'a> {
    pub(super) fn new(conditions: &'a Conditions, wedge: WedgePressure) -> Self {
        Self { conditions, wedge }
    }
}

impl Model for CouplingModel<'_> {
    type Input = HeartRate;
    type Output = EfficiencyResult;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(self.conditions, *input, self.wedge)
    }
}

/// Equation problem for coupling ratio matching.
///
/// Computes the residual as `coupling_ratio - target_ratio`.
pub(super) struct CouplingTargetProblem {
    target_ratio: f64,
}

impl CouplingTargetProblem {
    pub(super) fn new(target_ratio: f64) -> Self {
        Self { target_ratio }
    }
}

impl EquationProblem<1> for CouplingTargetProblem {
    type Input = HeartRate;
    type Output = EfficiencyResult;
    type Error = ConstraintError;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        StrictlyPositive::new(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.coupling_ratio - self.target_ratio])
    }
}
