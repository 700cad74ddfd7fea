use num_traits::Zero;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    units::Transmissivity,
};

use super::ConfigError;

/// Hydraulic properties of a confined aquifer.
///
/// Both properties are guaranteed to be strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AquiferParameters {
    transmissivity: Transmissivity,
    storativity: Ratio,
}

impl AquiferParameters {
    /// Constructs validated aquifer parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if either value is not
    /// strictly positive and finite.
    pub fn new(transmissivity: Transmissivity, storativity: Ratio) -> Result<Self, ConfigError> {
        let transmissivity = positive_finite(transmissivity, transmissivity.value)
            .map_err(ConfigError::invalid("transmissivity"))?;
        let storativity = positive_finite(storativity, storativity.get::<ratio>())
            .map_err(ConfigError::invalid("storativity"))?;

        Ok(Self {
            transmissivity,
            storativity,
        })
    }

    /// Returns the aquifer transmissivity.
    #[must_use]
    pub fn transmissivity(&self) -> Transmissivity {
        self.transmissivity
    }

    /// Returns the aquifer storativity.
    #[must_use]
    pub fn storativity(&self) -> Ratio {
        self.storativity
    }
}

/// Checks that `value` is strictly positive and that its raw magnitude is finite.
pub(super) fn positive_finite<T: PartialOrd + Zero>(
    value: T,
    raw: f64,
) -> Result<T, ConstraintError> {
    let value = StrictlyPositive::new(value)?.into_inner();
    if raw.is_finite() {
        Ok(value)
    } else {
        Err(ConstraintError::NotFinite)
    }
}
