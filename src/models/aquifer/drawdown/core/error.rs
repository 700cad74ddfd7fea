use thiserror::Error;
use uom::si::f64::Length;

use crate::support::{broadcast::ShapeMismatch, constraint::ConstraintError};

/// Errors raised while building a [`DrawdownSolution`](super::DrawdownSolution).
///
/// Every configuration problem surfaces here, before any evaluation happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The requested solution kind is not in the registry.
    #[error("unknown solution kind {name:?}")]
    UnknownSolution { name: String },

    /// The requested boundary kind is not recognized.
    #[error("unknown boundary kind {name:?}")]
    UnknownBoundary { name: String },

    /// A boundary was requested without a distance to the pumping well.
    #[error("boundary requires a distance")]
    MissingBoundaryDistance,

    /// A parameter violates its numeric constraint.
    #[error("invalid {name}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,

        /// Violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// Only part of the skin geometry (transmissivity, skin radius, well radius) was given.
    #[error("skin geometry requires skin transmissivity, skin radius, and well radius")]
    IncompleteSkinGeometry,

    /// Both a nonzero skin factor and a skin geometry were given.
    #[error("skin factor and skin geometry are mutually exclusive")]
    ConflictingSkin,
}

impl ConfigError {
    pub(super) fn invalid(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { name, source }
    }
}

/// Errors raised while evaluating drawdown.
///
/// All query points are checked before any drawdown is computed,
/// so an error never comes with partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawdownError {
    /// Sequence-valued query arguments have different lengths.
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatch),

    /// A query value lies outside the solution's domain.
    ///
    /// Radial distance and elapsed time must be strictly positive and finite.
    /// The flow rate must be finite.
    #[error("invalid {name} at query index {index}")]
    Domain {
        /// Query argument name.
        name: &'static str,

        /// Position of the offending point in the broadcast query.
        index: usize,

        /// Violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The observation point lies at or beyond twice the boundary distance,
    /// so the mirrored image well distance is not positive.
    #[error("image well distance {image_distance:?} is not positive at query index {index}")]
    ImageBeyondBoundary {
        /// Position of the offending point in the broadcast query.
        index: usize,

        /// Radial distance of the observation point.
        radius: Length,

        /// Mirrored image well distance, `2d - r`.
        image_distance: Length,
    },
}
