//! Venous congestion: optimal wedge pressure and filling-pressure penalty.

/// Lower plausibility bound on the optimal wedge pressure, mmHg.
pub const MIN_WEDGE_PRESSURE: f64 = 5.0;

/// Upper plausibility bound on the optimal wedge pressure, mmHg.
pub const MAX_WEDGE_PRESSURE: f64 = 25.0;

/// Wedge pressure of a normal ventricle at 75 bpm and the reference SVR, mmHg.
const BASELINE_WEDGE_PRESSURE: f64 = 12.0;

const REFERENCE_SVR: f64 = 800.0;
const REFERENCE_HR: f64 = 75.0;

/// Computes the optimal wedge pressure in mmHg.
///
/// A weaker ventricle, higher afterload and faster rate all raise the filling
/// pressure the heart needs.
/// The result is saturated to [`MIN_WEDGE_PRESSURE`]..=[`MAX_WEDGE_PRESSURE`].
#[must_use]
pub fn optimal_wedge_pressure(heart_rate: f64, svr: f64, ef: f64) -> f64 {
    let ef_factor = 1.0 - ef;
    let svr_factor = svr / REFERENCE_SVR - 1.0;
    let hr_factor = 1.0 - (-0.1 * (heart_rate - REFERENCE_HR)).exp();

    let raw = BASELINE_WEDGE_PRESSURE
        * (1.0 - 0.4 * ef_factor)
        * (1.0 + 0.3 * svr_factor)
        * (1.0 + 0.2 * hr_factor);

    raw.clamp(MIN_WEDGE_PRESSURE, MAX_WEDGE_PRESSURE)
}

/// Computes how strongly congestion is weighted, dimensionless.
///
/// Grows as EF falls and as SVR rises.
#[must_use]
pub fn congestion_sensitivity(svr: f64, ef: f64) -> f64 {
    (1.5 - ef) * (svr / REFERENCE_SVR)
}

/// Computes the congestion penalty for a wedge pressure, dimensionless and non-negative.
///
/// Under-filling costs `0.3·d²`; over-filling costs `eᵈ − 1` and is unbounded.
/// Both are scaled by `sensitivity`.
#[must_use]
pub fn congestion_penalty(wedge: f64, optimal_wedge: f64, sensitivity: f64) -> f64 {
    let deviation = wedge - optimal_wedge;

    let raw = if deviation < 0.0 {
        0.3 * deviation.powi(2)
    } else {
        deviation.exp_m1()
    };

    raw * sensitivity
}

/// The congestion model at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CongestionProfile {
    optimal_wedge_pressure: f64,
    sensitivity: f64,
}

impl CongestionProfile {
    /// Builds the profile for the given heart rate, SVR and EF.
    #[must_use]
    pub fn new(heart_rate: f64, svr: f64, ef: f64) -> Self {
        Self {
            optimal_wedge_pressure: optimal_wedge_pressure(heart_rate, svr, ef),
            sensitivity: congestion_sensitivity(svr, ef),
        }
    }

    /// Optimal wedge pressure, mmHg.
    #[must_use]
    pub fn optimal_wedge_pressure(&self) -> f64 {
        self.optimal_wedge_pressure
    }

    /// Congestion weighting, dimensionless.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Penalty at `wedge` mmHg.
    #[must_use]
    pub fn penalty(&self, wedge: f64) -> f64 {
        congestion_penalty(wedge, self.optimal_wedge_pressure, self.sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn baseline_is_twelve_for_a_perfect_ventricle() {
        assert_relative_eq!(optimal_wedge_pressure(75.0, 800.0, 1.0), 12.0);
    }

    #[test]
    fn reduced_ejection_fraction_lowers_optimum() {
        // 12 * (1 - 0.4 * 0.65)
        assert_relative_eq!(
            optimal_wedge_pressure(75.0, 800.0, 0.35),
            8.88,
            epsilon = 1e-12
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn saturates_at_bounds() {
        // At 40 bpm the heart rate factor is strongly negative.
        assert_eq!(optimal_wedge_pressure(40.0, 800.0, 0.35), MIN_WEDGE_PRESSURE);
        assert_eq!(optimal_wedge_pressure(120.0, 5000.0, 1.0), MAX_WEDGE_PRESSURE);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn penalty_is_zero_at_optimum() {
        let profile = CongestionProfile::new(90.0, 1200.0, 0.35);
        assert_eq!(profile.penalty(profile.optimal_wedge_pressure()), 0.0);
    }

    #[test]
    fn penalty_is_asymmetric() {
        let under = congestion_penalty(10.0, 12.0, 1.0);
        let over = congestion_penalty(14.0, 12.0, 1.0);

        assert_relative_eq!(under, 1.2, epsilon = 1e-12);
        assert_relative_eq!(over, 2.0_f64.exp() - 1.0, epsilon = 1e-12);
        assert!(over > under);
    }

    #[test]
    fn over_filling_is_unbounded() {
        assert!(congestion_penalty(1000.0, 12.0, 1.0).is_infinite());
    }

    #[test]
    fn sensitivity_scales_penalty() {
        let sensitivity = congestion_sensitivity(1600.0, 0.5);
        assert_relative_eq!(sensitivity, 2.0);
        assert_relative_eq!(
            congestion_penalty(10.0, 12.0, sensitivity),
            2.4,
            epsilon = 1e-12
        );
    }

    proptest! {
        #[test]
        fn optimum_is_bounded_and_monotone_in_svr(
            heart_rate in 20.0..250.0_f64,
            ef in 0.01..=1.0_f64,
            svr in 100.0..3000.0_f64,
            delta in 0.0..1000.0_f64,
        ) {
            let low = optimal_wedge_pressure(heart_rate, svr, ef);
            let high = optimal_wedge_pressure(heart_rate, svr + delta, ef);

            prop_assert!((MIN_WEDGE_PRESSURE..=MAX_WEDGE_PRESSURE).contains(&low));
            prop_assert!((MIN_WEDGE_PRESSURE..=MAX_WEDGE_PRESSURE).contains(&high));
            prop_assert!(high >= low, "{high} < {low}");
        }

        #[test]
        fn penalty_is_non_negative(
            wedge in 0.0..40.0_f64,
            optimal in MIN_WEDGE_PRESSURE..=MAX_WEDGE_PRESSURE,
            ef in 0.01..=1.0_f64,
            svr in 100.0..3000.0_f64,
        ) {
            let penalty = congestion_penalty(wedge, optimal, congestion_sensitivity(svr, ef));
            prop_assert!(penalty >= 0.0);
        }
    }
}
