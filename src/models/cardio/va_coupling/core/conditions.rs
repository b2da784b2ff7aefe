use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitIntervalLowerOpen},
    units::{Clinical, HydraulicResistance},
};

use super::{Input, ModelError};

/// Heart rate in beats per minute, guaranteed strictly positive.
pub type HeartRate = Constrained<f64, StrictlyPositive>;

/// Validates a heart rate given in beats per minute.
///
/// # Errors
///
/// Returns [`ModelError::Domain`] if `bpm` is not strictly positive.
pub fn heart_rate(bpm: f64) -> Result<HeartRate, ModelError> {
    StrictlyPositive::new(bpm).map_err(ModelError::domain(Input::HeartRate))
}

/// Conditions held fixed while heart rate varies.
///
/// Both values are validated on construction:
/// SVR must be strictly positive and EF must lie in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    svr: f64,
    ef: f64,
}

impl Conditions {
    /// Constructs validated conditions.
    ///
    /// - `svr`: systemic vascular resistance, dyn·s/cm⁵.
    /// - `ef`: ejection fraction, as a fraction (0.55, not 55).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] naming the first invalid input.
    pub fn new(svr: f64, ef: f64) -> Result<Self, ModelError> {
        let svr = StrictlyPositive::new(svr).map_err(ModelError::domain(Input::Svr))?;
        let ef =
            UnitIntervalLowerOpen::new(ef).map_err(ModelError::domain(Input::EjectionFraction))?;
        Ok(Self::from_constrained(svr, ef))
    }

    /// Constructs conditions from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        svr: Constrained<f64, StrictlyPositive>,
        ef: Constrained<f64, UnitIntervalLowerOpen>,
    ) -> Self {
        Self {
            svr: svr.into_inner(),
            ef: ef.into_inner(),
        }
    }

    /// Returns the systemic vascular resistance in dyn·s/cm⁵.
    #[must_use]
    pub fn svr(&self) -> f64 {
        self.svr
    }

    /// Returns the systemic vascular resistance as a typed quantity.
    #[must_use]
    pub fn svr_quantity(&self) -> HydraulicResistance {
        HydraulicResistance::from_clinical(self.svr)
    }

    /// Returns the ejection fraction.
    #[must_use]
    pub fn ef(&self) -> f64 {
        self.ef
    }
}

/// Filling pressure at which the congestion penalty is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WedgePressure {
    /// Evaluate at the model's own optimal wedge pressure.
    ///
    /// The deviation is then zero by construction, so the congestion penalty
    /// never affects efficiency.
    #[default]
    Optimal,

    /// Evaluate at a measured wedge pressure, in mmHg.
    Measured(Constrained<f64, NonNegative>),
}

impl WedgePressure {
    /// Validates a measured wedge pressure given in mmHg.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] if `mmhg` is negative or `NaN`.
    pub fn measured(mmhg: f64) -> Result<Self, ModelError> {
        let wedge = NonNegative::new(mmhg).map_err(ModelError::domain(Input::WedgePressure))?;
        Ok(Self::Measured(wedge))
    }
}
