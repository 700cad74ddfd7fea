//! Capability interfaces for drawdown contributions.

use uom::si::f64::{Length, Time, VolumeRate};

use crate::support::broadcast::Broadcast;

use super::{
    AquiferParameters, DrawdownError,
    query::{QueryPoint, WellTestQuery, evaluate},
};

pub(crate) mod sealed {
    use uom::si::f64::Length;

    use super::QueryPoint;

    /// Per-point evaluation that skips [`check`](super::DrawdownEffect::check).
    pub trait PointDrawdown {
        /// Returns the contribution at a point that already passed `check`.
        fn point_drawdown(&self, point: &QueryPoint) -> Length;
    }
}

use sealed::PointDrawdown;

/// A contribution to total drawdown that superposes linearly with others.
///
/// Implemented by [`Theis`](super::Theis), [`ImageBoundary`](super::ImageBoundary),
/// and [`Skin`](super::Skin). The set of implementations is closed.
pub trait DrawdownEffect: PointDrawdown {
    /// Checks that the contribution is defined at `point`.
    ///
    /// `index` identifies the point in error reports.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawdownError`] if the contribution cannot be evaluated at `point`.
    fn check(&self, _index: usize, _point: &QueryPoint) -> Result<(), DrawdownError> {
        Ok(())
    }

    /// Returns the drawdown contribution at a single point.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawdownError`] if [`check`](Self::check) rejects `point`.
    fn drawdown_at(&self, point: &QueryPoint) -> Result<Length, DrawdownError> {
        self.check(0, point)?;
        Ok(self.point_drawdown(point))
    }

    /// Evaluates this contribution alone over a broadcast query.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawdownError`] on shape mismatch or if any point is invalid.
    /// Points are all checked before evaluation.
    fn compute_drawdown(
        &self,
        q: impl Into<Broadcast<VolumeRate>>,
        r: impl Into<Broadcast<Length>>,
        t: impl Into<Broadcast<Time>>,
    ) -> Result<Broadcast<Length>, DrawdownError>
    where
        Self: Sized,
    {
        evaluate(
            WellTestQuery::new(q, r, t),
            |index, point| self.check(index, point),
            |point| self.point_drawdown(point),
        )
    }
}

/// A base solution of the radial diffusivity equation.
///
/// Aquifer solutions are defined at every valid [`QueryPoint`], which lets
/// them stand in for image wells.
pub trait AquiferSolution: DrawdownEffect {
    /// Returns the aquifer the solution is evaluated for.
    fn parameters(&self) -> &AquiferParameters;
}
