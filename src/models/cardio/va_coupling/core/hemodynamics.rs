//! Stroke volume, pressure and elastance relations.
//!
//! All functions take heart rate in bpm, SVR in dyn·s/cm⁵ and EF as a fraction,
//! and return values in clinical units (mL, L/min, mmHg, mmHg/mL).

use uom::si::{
    f64::{Pressure, Time, Volume, VolumeRate},
    pressure::millimeter_of_mercury,
    time::second,
    volume::milliliter,
    volume_rate::liter_per_minute,
};

use crate::support::{
    constraint::{NonZero, StrictlyPositive},
    units::{Clinical, Elastance},
};

use super::{ArithmeticError, Conditions, HeartRate};

/// Nominal end-diastolic volume, mL.
const NOMINAL_EDV: f64 = 150.0;

/// SVR at which afterload neither helps nor hurts, dyn·s/cm⁵.
const REFERENCE_SVR: f64 = 800.0;

/// Heart rate above which diastolic filling starts to shorten, bpm.
const FILLING_ONSET_HR: f64 = 60.0;

/// dyn·s/cm⁵ per Wood unit (mmHg·min/L).
const DYN_S_CM5_PER_WOOD_UNIT: f64 = 80.0;

/// Fraction of mean arterial pressure taken as end-systolic pressure.
const END_SYSTOLIC_PRESSURE_FRACTION: f64 = 0.9;

/// Ees of a normal ventricle (EF 0.55) at the reference SVR, mmHg/mL.
const NORMAL_EES: f64 = 2.0;
const NORMAL_EF: f64 = 0.55;

/// Computes stroke volume in mL.
///
/// Tachycardia shortens diastolic filling (no effect at or below 60 bpm) and
/// afterload above the 800 dyn·s/cm⁵ reference reduces ejection.
#[must_use]
pub fn stroke_volume(heart_rate: f64, svr: f64, ef: f64) -> f64 {
    let filling_effect =
        (-0.25 * ((heart_rate - FILLING_ONSET_HR) / FILLING_ONSET_HR).max(0.0)).exp();
    let afterload_effect = (-0.0003 * (svr - REFERENCE_SVR)).exp();
    NOMINAL_EDV * filling_effect * afterload_effect * ef
}

/// Computes the diastolic filling time in seconds.
///
/// This is the beat period minus a fixed 0.2 s systole, and is informational only.
/// It goes negative above 300 bpm.
#[must_use]
pub fn diastolic_filling_time(heart_rate: f64) -> f64 {
    60.0 / heart_rate - 0.2
}

/// Elastances and the intermediate hemodynamics they are derived from.
///
/// Values are in clinical units.
/// `end_systolic` is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elastances {
    /// Arterial elastance (Ea), mmHg/mL.
    pub arterial: f64,

    /// End-systolic elastance (Ees), mmHg/mL.
    pub end_systolic: f64,

    /// Stroke volume, mL.
    pub stroke_volume: f64,

    /// Cardiac output, L/min.
    pub cardiac_output: f64,

    /// Mean arterial pressure, mmHg.
    pub mean_arterial_pressure: f64,
}

impl Elastances {
    /// Returns the coupling ratio Ea/Ees.
    #[must_use]
    pub fn coupling_ratio(&self) -> f64 {
        self.arterial / self.end_systolic
    }
}

/// Computes arterial and end-systolic elastance.
///
/// # Errors
///
/// Returns an [`ArithmeticError`] if stroke volume is not strictly positive
/// or Ees evaluates to zero.
/// Neither happens for physiological inputs; both require SVR in the
/// thousands of Wood units or a vanishing EF, where the exponentials underflow.
pub fn elastances(heart_rate: f64, svr: f64, ef: f64) -> Result<Elastances, ArithmeticError> {
    let stroke_volume = stroke_volume(heart_rate, svr, ef);
    let sv = StrictlyPositive::new(stroke_volume)
        .map_err(|_| ArithmeticError::NonPositiveStrokeVolume { stroke_volume })?
        .into_inner();

    let cardiac_output = sv * heart_rate / 1000.0;
    let mean_arterial_pressure = cardiac_output * svr / DYN_S_CM5_PER_WOOD_UNIT;
    let arterial = mean_arterial_pressure * END_SYSTOLIC_PRESSURE_FRACTION / sv;

    let base_ees = NORMAL_EES * ef / NORMAL_EF;
    let end_systolic = NonZero::new(base_ees * (-0.0002 * (svr - REFERENCE_SVR)).exp())
        .map_err(|_| ArithmeticError::ZeroEndSystolicElastance)?
        .into_inner();

    Ok(Elastances {
        arterial,
        end_systolic,
        stroke_volume: sv,
        cardiac_output,
        mean_arterial_pressure,
    })
}

/// Hemodynamic state at one heart rate, as typed quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemodynamicState {
    /// Stroke volume.
    pub stroke_volume: Volume,

    /// Cardiac output.
    pub cardiac_output: VolumeRate,

    /// Mean arterial pressure.
    pub mean_arterial_pressure: Pressure,

    /// Arterial elastance (Ea).
    pub arterial_elastance: Elastance,

    /// End-systolic elastance (Ees).
    pub end_systolic_elastance: Elastance,

    /// Diastolic filling time; negative above 300 bpm.
    pub diastolic_filling_time: Time,
}

impl HemodynamicState {
    /// Computes the hemodynamic state for `conditions` at `heart_rate`.
    ///
    /// # Errors
    ///
    /// Returns an [`ArithmeticError`] under the same conditions as [`elastances`].
    pub fn new(conditions: &Conditions, heart_rate: HeartRate) -> Result<Self, ArithmeticError> {
        let heart_rate = heart_rate.into_inner();
        let e = elastances(heart_rate, conditions.svr(), conditions.ef())?;

        Ok(Self {
            stroke_volume: Volume::new::<milliliter>(e.stroke_volume),
            cardiac_output: VolumeRate::new::<liter_per_minute>(e.cardiac_output),
            mean_arterial_pressure: Pressure::new::<millimeter_of_mercury>(
                e.mean_arterial_pressure,
            ),
            arterial_elastance: Elastance::from_clinical(e.arterial),
            end_systolic_elastance: Elastance::from_clinical(e.end_systolic),
            diastolic_filling_time: Time::new::<second>(diastolic_filling_time(heart_rate)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::cardio::va_coupling::core::test_support::{conditions, hr};

    #[test]
    #[allow(clippy::float_cmp)]
    fn stroke_volume_at_reference_point_is_nominal() {
        for ef in [0.15, 0.35, 0.55, 0.75, 1.0] {
            assert_eq!(stroke_volume(60.0, 800.0, ef), 150.0 * ef);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn bradycardia_does_not_change_filling() {
        assert_eq!(
            stroke_volume(40.0, 800.0, 0.35),
            stroke_volume(60.0, 800.0, 0.35)
        );
    }

    #[test]
    fn tachycardia_and_afterload_reduce_stroke_volume() {
        assert!(stroke_volume(120.0, 800.0, 0.35) < stroke_volume(60.0, 800.0, 0.35));
        assert!(stroke_volume(60.0, 1200.0, 0.35) < stroke_volume(60.0, 800.0, 0.35));
        assert!(stroke_volume(60.0, 500.0, 0.35) > stroke_volume(60.0, 800.0, 0.35));

        // At 120 bpm the filling penalty is exp(-0.25).
        assert_relative_eq!(
            stroke_volume(120.0, 800.0, 0.35),
            52.5 * (-0.25_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn elastances_at_seventy_five_bpm() {
        let e = elastances(75.0, 800.0, 0.35).unwrap();

        // Ea reduces to 0.9 * hr * svr / 80000; stroke volume cancels.
        assert_relative_eq!(e.arterial, 0.675, epsilon = 1e-12);
        assert_relative_eq!(e.end_systolic, 0.7 / 0.55, epsilon = 1e-12);
        assert_relative_eq!(e.stroke_volume, 49.319_185_797_707_48, epsilon = 1e-9);
        assert_relative_eq!(e.cardiac_output, e.stroke_volume * 0.075, epsilon = 1e-12);
        assert_relative_eq!(e.mean_arterial_pressure, e.cardiac_output * 10.0, epsilon = 1e-12);
        assert_relative_eq!(e.coupling_ratio(), 0.530_357_142_857_143, epsilon = 1e-12);
    }

    #[test]
    fn stroke_volume_underflow_is_an_error() {
        // exp(-0.0003 * svr) underflows long before SVR reaches 1e7.
        assert!(matches!(
            elastances(75.0, 1.0e7, 0.35),
            Err(ArithmeticError::NonPositiveStrokeVolume { stroke_volume }) if stroke_volume == 0.0
        ));
    }

    #[test]
    fn vanishing_end_systolic_elastance_is_an_error() {
        // The smallest subnormal EF keeps a nonzero stroke volume here
        // while Ees rounds to zero.
        let ef = f64::from_bits(1);
        assert!(stroke_volume(60.0, 15_800.0, ef) > 0.0);
        assert_eq!(
            elastances(60.0, 15_800.0, ef),
            Err(ArithmeticError::ZeroEndSystolicElastance)
        );
    }

    #[test]
    fn typed_state_matches_clinical_values() {
        let state = HemodynamicState::new(&conditions(800.0, 0.35), hr(75.0)).unwrap();
        let e = elastances(75.0, 800.0, 0.35).unwrap();

        assert_relative_eq!(
            state.stroke_volume.get::<milliliter>(),
            e.stroke_volume,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.cardiac_output.get::<liter_per_minute>(),
            e.cardiac_output,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.mean_arterial_pressure.get::<millimeter_of_mercury>(),
            e.mean_arterial_pressure,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.arterial_elastance.to_clinical(),
            e.arterial,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.diastolic_filling_time.get::<second>(),
            0.6,
            epsilon = 1e-12
        );
    }

    proptest! {
        #[test]
        fn no_singularities_in_valid_domain(
            heart_rate in 20.0..250.0_f64,
            svr in 100.0..4000.0_f64,
            ef in 0.01..=1.0_f64,
        ) {
            let e = elastances(heart_rate, svr, ef);
            prop_assert!(e.is_ok(), "{e:?}");
            let e = e.unwrap();
            prop_assert!(e.stroke_volume > 0.0);
            prop_assert!(e.end_systolic > 0.0);
            prop_assert!(e.coupling_ratio().is_finite());
        }
    }
}
