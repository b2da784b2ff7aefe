//! Result types for single evaluations and heart-rate sweeps.

/// Efficiency and supporting hemodynamics at one heart rate.
///
/// Values are in clinical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyResult {
    /// Heart rate, bpm.
    pub heart_rate: f64,

    /// Composite efficiency score, 0–100.
    pub efficiency: f64,

    /// Coupling ratio Ea/Ees.
    pub coupling_ratio: f64,

    /// Stroke volume, mL.
    pub stroke_volume: f64,

    /// Cardiac output, L/min.
    pub cardiac_output: f64,

    /// Mean arterial pressure, mmHg.
    pub mean_arterial_pressure: f64,

    /// Optimal wedge pressure, mmHg.
    pub optimal_wedge_pressure: f64,

    /// Coupling sub-score, 0–1, peaking at the ideal coupling ratio.
    pub mechanical_efficiency: f64,

    /// Heart-rate sub-score, 0–1, peaking at 75 bpm.
    pub diastolic_efficiency: f64,

    /// Congestion penalty applied to the score.
    pub congestion_penalty: f64,
}

/// Evaluations across a heart-rate grid and the most efficient of them.
///
/// Points are ordered by ascending heart rate.
/// A sweep result is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    points: Vec<EfficiencyResult>,
    optimal_index: usize,
}

impl SweepResult {
    /// Wraps grid-ordered points and locates the optimum.
    ///
    /// Ties go to the lowest heart rate.
    /// Returns `None` if `points` is empty.
    pub(super) fn new(points: Vec<EfficiencyResult>) -> Option<Self> {
        let first = points.first()?;

        let (optimal_index, _) = points.iter().enumerate().skip(1).fold(
            (0, first.efficiency),
            |(best_index, best), (index, point)| {
                if point.efficiency > best {
                    (index, point.efficiency)
                } else {
                    (best_index, best)
                }
            },
        );

        Some(Self {
            points,
            optimal_index,
        })
    }

    /// The evaluated points, ordered by ascending heart rate.
    #[must_use]
    pub fn points(&self) -> &[EfficiencyResult] {
        &self.points
    }

    /// The point with the highest efficiency.
    #[must_use]
    pub fn optimal_point(&self) -> &EfficiencyResult {
        &self.points[self.optimal_index]
    }

    /// Grid index of [`Self::optimal_point`].
    #[must_use]
    pub fn optimal_index(&self) -> usize {
        self.optimal_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for parity with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EfficiencyResult> {
        self.points.iter()
    }

    /// Heart-rate column, bpm.
    pub fn heart_rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.heart_rate)
    }

    /// Efficiency column, 0–100.
    pub fn efficiencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.efficiency)
    }

    /// Coupling-ratio column.
    pub fn coupling_ratios(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.coupling_ratio)
    }

    /// Consumes the sweep and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<EfficiencyResult> {
        self.points
    }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a EfficiencyResult;
    type IntoIter = std::slice::Iter<'a, EfficiencyResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
