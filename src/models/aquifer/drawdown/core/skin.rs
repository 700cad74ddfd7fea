//! Wellbore skin.
//!
//! Skin is an infinitesimally thin zone of altered transmissivity at the
//! well face. It adds a steady pressure loss that depends on the flow rate
//! only:
//!
//! ```text
//! s_skin = q / (2π·T) · σ
//! ```
//!
//! Negative skin factors (stimulated wells) are applied unchanged through the
//! same linear relation. For strongly negative factors this overstates the
//! drawdown reduction compared with an effective-wellbore-radius treatment.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Ratio, VolumeRate},
    length::meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{constraint::ConstraintError, units::Transmissivity};

use super::{
    AquiferParameters, ConfigError, params::positive_finite, query::QueryPoint,
    traits::{DrawdownEffect, sealed::PointDrawdown},
};

/// Skin specification for a drawdown solution.
///
/// Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkinConfig {
    /// Explicit dimensionless skin factor `σ`.
    Factor(Ratio),

    /// Skin zone geometry, from which `σ = (T / T_s - 1) · ln(r_s / r_w)`.
    ///
    /// `T` is the aquifer transmissivity. This mode is the less-trusted path:
    /// prefer an explicit factor from test interpretation where one exists.
    Geometry {
        /// Transmissivity of the skin zone, `T_s`.
        transmissivity: Transmissivity,

        /// Outer radius of the skin zone, `r_s`.
        skin_radius: Length,

        /// Well radius, `r_w`.
        well_radius: Length,
    },
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self::Factor(Ratio::new::<ratio>(0.0))
    }
}

impl SkinConfig {
    /// An explicit skin factor.
    #[must_use]
    pub fn factor(sigma: f64) -> Self {
        Self::Factor(Ratio::new::<ratio>(sigma))
    }

    /// Resolves the configuration into a skin effect for `aquifer`.
    ///
    /// Returns `Ok(None)` when the resulting skin factor is zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if the factor is not finite or
    /// a geometric value is not strictly positive and finite.
    pub fn resolve(&self, aquifer: &AquiferParameters) -> Result<Option<Skin>, ConfigError> {
        let skin = match *self {
            Self::Factor(sigma) => Skin::new(aquifer, sigma)?,
            Self::Geometry {
                transmissivity,
                skin_radius,
                well_radius,
            } => Skin::from_geometry(aquifer, transmissivity, skin_radius, well_radius)?,
        };

        Ok((skin.factor().get::<ratio>() != 0.0).then_some(skin))
    }
}

/// Steady drawdown from wellbore skin, independent of `r` and `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skin {
    transmissivity: Transmissivity,
    factor: Ratio,
}

impl Skin {
    /// Creates a skin effect from an explicit skin factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if `factor` is not finite.
    pub fn new(aquifer: &AquiferParameters, factor: Ratio) -> Result<Self, ConfigError> {
        if !factor.get::<ratio>().is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "skin factor",
                source: ConstraintError::NotFinite,
            });
        }

        Ok(Self {
            transmissivity: aquifer.transmissivity(),
            factor,
        })
    }

    /// Creates a skin effect from the skin zone geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if any value is not strictly
    /// positive and finite.
    pub fn from_geometry(
        aquifer: &AquiferParameters,
        skin_transmissivity: Transmissivity,
        skin_radius: Length,
        well_radius: Length,
    ) -> Result<Self, ConfigError> {
        let skin_transmissivity = positive_finite(skin_transmissivity, skin_transmissivity.value)
            .map_err(ConfigError::invalid("skin transmissivity"))?;
        let skin_radius = positive_finite(skin_radius, skin_radius.get::<meter>())
            .map_err(ConfigError::invalid("skin radius"))?;
        let well_radius = positive_finite(well_radius, well_radius.get::<meter>())
            .map_err(ConfigError::invalid("well radius"))?;

        let contrast = aquifer.transmissivity().value / skin_transmissivity.value - 1.0;
        let log_radii = (skin_radius.get::<meter>() / well_radius.get::<meter>()).ln();

        Self::new(aquifer, Ratio::new::<ratio>(contrast * log_radii))
    }

    /// Returns the dimensionless skin factor `σ`.
    #[must_use]
    pub fn factor(&self) -> Ratio {
        self.factor
    }

    /// Returns the skin drawdown for a flow rate.
    #[must_use]
    pub fn skin_drawdown(&self, q: VolumeRate) -> Length {
        let q = q.get::<cubic_meter_per_second>();
        let sigma = self.factor.get::<ratio>();
        Length::new::<meter>(q * (sigma / (2.0 * PI * self.transmissivity.value)))
    }
}

impl PointDrawdown for Skin {
    fn point_drawdown(&self, point: &QueryPoint) -> Length {
        self.skin_drawdown(point.q())
    }
}

impl DrawdownEffect for Skin {}
