use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero (not equal to zero).
///
/// Used to guard divisors, such as the end-systolic elastance in a coupling ratio.
///
/// # Examples
///
/// ```
/// use va_coupling_models::support::constraint::{Constrained, NonZero};
///
/// let ees = Constrained::<_, NonZero>::new(1.27).unwrap();
/// assert_eq!(0.675 / ees.into_inner(), 0.675 / 1.27);
///
/// assert!(NonZero::new(-0.5).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(-0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::units::{Clinical, Elastance};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonZero>::new(2.0).is_ok());
        assert!(NonZero::new(-3.5).is_ok());
        assert_eq!(NonZero::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn elastances() {
        assert!(NonZero::new(Elastance::from_clinical(2.0)).is_ok());
        assert!(NonZero::new(Elastance::from_clinical(0.0)).is_err());
    }
}
