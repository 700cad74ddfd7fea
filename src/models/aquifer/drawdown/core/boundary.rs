//! Linear boundaries represented by image wells.
//!
//! A single straight boundary at distance `d` from the pumping well is
//! replaced by an image well mirrored across it. An observation point at
//! radial distance `r` sees the image well at `r' = 2d - r`.
//!
//! - A constant-pressure (recharge) boundary uses an image well of opposite
//!   strength, so its contribution is `-s(q, r', t)`.
//! - A no-flow (impermeable) boundary uses an image well of equal strength,
//!   so its contribution is `+s(q, r', t)`.

use std::str::FromStr;

use uom::{
    ConstZero,
    si::{
        f64::{Length, Time, VolumeRate},
        length::meter,
    },
};

use crate::support::broadcast::Broadcast;

use super::{
    ConfigError, DrawdownError,
    params::positive_finite,
    query::QueryPoint,
    traits::{AquiferSolution, DrawdownEffect, sealed::PointDrawdown},
};

/// Hydraulic condition at a linear boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryKind {
    /// No boundary; the aquifer is laterally infinite.
    #[default]
    None,

    /// Constant-pressure (recharge) boundary.
    ///
    /// Parsed from `"constant-pressure"` or the legacy name `"positive"`.
    ConstantPressure,

    /// No-flow (impermeable) boundary.
    ///
    /// Parsed from `"no-flow"` or the legacy name `"negative"`.
    NoFlow,
}

impl BoundaryKind {
    /// Sign of the image well strength relative to the pumping well.
    fn image_sign(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::ConstantPressure => -1.0,
            Self::NoFlow => 1.0,
        }
    }
}

impl FromStr for BoundaryKind {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "constant-pressure" | "constant_pressure" | "positive" => Ok(Self::ConstantPressure),
            "no-flow" | "no_flow" | "negative" => Ok(Self::NoFlow),
            _ => Err(ConfigError::UnknownBoundary {
                name: name.to_owned(),
            }),
        }
    }
}

/// Boundary configuration for a drawdown solution.
///
/// The distance is required unless the kind is [`BoundaryKind::None`],
/// and is checked when the solution is built.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundaryConfig {
    /// Boundary condition.
    pub kind: BoundaryKind,

    /// Distance from the pumping well to the boundary.
    pub distance: Option<Length>,
}

impl BoundaryConfig {
    /// No boundary.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A constant-pressure boundary at `distance`.
    #[must_use]
    pub fn constant_pressure(distance: Length) -> Self {
        Self {
            kind: BoundaryKind::ConstantPressure,
            distance: Some(distance),
        }
    }

    /// A no-flow boundary at `distance`.
    #[must_use]
    pub fn no_flow(distance: Length) -> Self {
        Self {
            kind: BoundaryKind::NoFlow,
            distance: Some(distance),
        }
    }

    /// Resolves the configuration into an image well for `aquifer`.
    ///
    /// Returns `Ok(None)` when no boundary is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBoundaryDistance`] if a boundary has no
    /// distance, or [`ConfigError::InvalidParameter`] if the distance is not
    /// strictly positive and finite.
    pub fn resolve<A: AquiferSolution>(
        &self,
        aquifer: A,
    ) -> Result<Option<ImageBoundary<A>>, ConfigError> {
        if self.kind == BoundaryKind::None {
            return Ok(None);
        }

        let distance = self.distance.ok_or(ConfigError::MissingBoundaryDistance)?;
        let distance = positive_finite(distance, distance.get::<meter>())
            .map_err(ConfigError::invalid("boundary distance"))?;

        Ok(Some(ImageBoundary {
            kind: self.kind,
            distance,
            aquifer,
        }))
    }
}

/// Image well correction for a single linear boundary.
///
/// Constructed through [`BoundaryConfig::resolve`], so the kind is never
/// [`BoundaryKind::None`] and the distance is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBoundary<A> {
    kind: BoundaryKind,
    distance: Length,
    aquifer: A,
}

impl<A: AquiferSolution> ImageBoundary<A> {
    /// Returns the boundary condition.
    #[must_use]
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Returns the distance from the pumping well to the boundary.
    #[must_use]
    pub fn distance(&self) -> Length {
        self.distance
    }

    /// Returns the distance from an observation point at `r` to the image well.
    #[must_use]
    pub fn image_distance(&self, r: Length) -> Length {
        self.distance * 2.0 - r
    }

    /// Evaluates the boundary correction alone over a broadcast query.
    ///
    /// This is [`DrawdownEffect::compute_drawdown`] under its domain name.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawdownError`] on shape mismatch, invalid points, or
    /// points whose image distance is not positive.
    pub fn effect(
        &self,
        q: impl Into<Broadcast<VolumeRate>>,
        r: impl Into<Broadcast<Length>>,
        t: impl Into<Broadcast<Time>>,
    ) -> Result<Broadcast<Length>, DrawdownError> {
        self.compute_drawdown(q, r, t)
    }
}

impl<A: AquiferSolution> DrawdownEffect for ImageBoundary<A> {
    fn check(&self, index: usize, point: &QueryPoint) -> Result<(), DrawdownError> {
        let image_distance = self.image_distance(point.r());
        if image_distance > Length::ZERO {
            Ok(())
        } else {
            Err(DrawdownError::ImageBeyondBoundary {
                index,
                radius: point.r(),
                image_distance,
            })
        }
    }
}

impl<A: AquiferSolution> PointDrawdown for ImageBoundary<A> {
    fn point_drawdown(&self, point: &QueryPoint) -> Length {
        let image = point.at_radius_unchecked(self.image_distance(point.r()));
        self.aquifer.point_drawdown(&image) * self.kind.image_sign()
    }
}
