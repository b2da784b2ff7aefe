use crate::support::constraint::StrictlyPositive;

use super::{GridError, HeartRate, WedgePressure};

/// Heart-rate grid and evaluation options for a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First grid point, bpm.
    pub hr_min: f64,

    /// Last grid point, bpm.
    pub hr_max: f64,

    /// Number of evenly spaced grid points, including both ends.
    pub sample_count: usize,

    /// Wedge pressure used for the congestion penalty at every point.
    pub wedge: WedgePressure,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            hr_min: 40.0,
            hr_max: 120.0,
            sample_count: 81,
            wedge: WedgePressure::Optimal,
        }
    }
}

impl SweepConfig {
    /// Builds the heart-rate grid.
    ///
    /// The first and last points equal `hr_min` and `hr_max` exactly.
    pub(super) fn grid(&self) -> Result<Vec<HeartRate>, GridError> {
        let hr_min = StrictlyPositive::new(self.hr_min).map_err(GridError::LowerBound)?;
        let (hr_min, hr_max) = (hr_min.into_inner(), self.hr_max);

        // Written so that NaN fails too.
        if !(hr_max > hr_min && hr_max.is_finite()) {
            return Err(GridError::EmptyRange { hr_min, hr_max });
        }
        if self.sample_count < 2 {
            return Err(GridError::TooFewSamples(self.sample_count));
        }

        let last = self.sample_count - 1;
        #[allow(clippy::cast_precision_loss)]
        let step = (hr_max - hr_min) / last as f64;

        (0..self.sample_count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let bpm = if i == last {
                    hr_max
                } else {
                    hr_min + i as f64 * step
                };
                StrictlyPositive::new(bpm).map_err(GridError::LowerBound)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn bpm(grid: &[HeartRate]) -> Vec<f64> {
        grid.iter().map(|hr| hr.into_inner()).collect()
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_grid_is_one_bpm_from_40_to_120() {
        let grid = bpm(&SweepConfig::default().grid().unwrap());

        assert_eq!(grid.len(), 81);
        assert_eq!(grid[0], 40.0);
        assert_eq!(grid[80], 120.0);
        for (i, hr) in grid.iter().enumerate() {
            assert_eq!(*hr, 40.0 + i as f64);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn uneven_grid_hits_endpoints_exactly() {
        let config = SweepConfig {
            hr_min: 45.3,
            hr_max: 131.7,
            sample_count: 7,
            ..SweepConfig::default()
        };
        let grid = bpm(&config.grid().unwrap());

        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0], 45.3);
        assert_eq!(grid[6], 131.7);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(grid[3], (45.3 + 131.7) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn two_samples_are_the_endpoints() {
        let config = SweepConfig {
            sample_count: 2,
            ..SweepConfig::default()
        };
        assert_eq!(bpm(&config.grid().unwrap()), [40.0, 120.0]);
    }

    #[test]
    fn rejects_bad_grids() {
        let bad_lower = SweepConfig {
            hr_min: 0.0,
            ..SweepConfig::default()
        };
        assert_eq!(
            bad_lower.grid(),
            Err(GridError::LowerBound(ConstraintError::Zero))
        );

        let reversed = SweepConfig {
            hr_min: 120.0,
            hr_max: 40.0,
            ..SweepConfig::default()
        };
        assert!(matches!(reversed.grid(), Err(GridError::EmptyRange { .. })));

        let degenerate = SweepConfig {
            hr_max: 40.0,
            ..SweepConfig::default()
        };
        assert!(matches!(degenerate.grid(), Err(GridError::EmptyRange { .. })));

        let nan = SweepConfig {
            hr_max: f64::NAN,
            ..SweepConfig::default()
        };
        assert!(matches!(nan.grid(), Err(GridError::EmptyRange { .. })));

        let single = SweepConfig {
            sample_count: 1,
            ..SweepConfig::default()
        };
        assert_eq!(single.grid(), Err(GridError::TooFewSamples(1)));
    }
}
