use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Transmissivity, storativity, boundary distance, radial distance, and
/// elapsed time all use this marker.
///
/// # Examples
///
/// ```
/// use well_test_models::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// // Associated constructor:
/// let storativity = StrictlyPositive::new(1e-4).unwrap();
/// assert_eq!(storativity.into_inner(), 1e-4);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Time},
        length::meter,
        time::second,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1e-6).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn radial_distances() {
        assert!(StrictlyPositive::new(Length::new::<meter>(400.0)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<meter>(-0.3)).is_err());
    }

    #[test]
    fn elapsed_times() {
        let t = StrictlyPositive::new(Time::new::<second>(3600.0)).unwrap();
        assert_eq!(t.as_ref().get::<second>(), 3600.0);

        assert!(StrictlyPositive::new(Time::new::<second>(0.0)).is_err());
    }
}
