//! Drawdown around a pumping well by superposition.
//!
//! A [`DrawdownSolution`] composes a base aquifer solution from the registry
//! with an optional image well boundary and optional wellbore skin. Because
//! the radial diffusivity equation is linear, total drawdown is the sum of
//! the individual contributions.

mod boundary;
mod config;
mod error;
mod given_drawdown;
mod params;
mod query;
mod registry;
mod skin;
mod theis;
mod traits;

#[cfg(test)]
mod test_support;

pub use boundary::{BoundaryConfig, BoundaryKind, ImageBoundary};
pub use config::DrawdownConfig;
pub use error::{ConfigError, DrawdownError};
pub use given_drawdown::{GivenDrawdownConfig, GivenDrawdownError, TimedDrawdown};
pub use params::AquiferParameters;
pub use query::{QueryPoint, WellTestQuery};
pub use registry::{AquiferModel, SolutionKind};
pub use skin::{Skin, SkinConfig};
pub use theis::Theis;
pub use traits::{AquiferSolution, DrawdownEffect};

use uom::si::f64::{Length, Time, VolumeRate};

use crate::support::broadcast::Broadcast;

use given_drawdown::given_drawdown;
use query::evaluate;
use traits::sealed::PointDrawdown;

/// A composed, reusable drawdown evaluator.
///
/// Built once from a solution kind, aquifer parameters, and optional boundary
/// and skin configurations. All configuration is validated at construction
/// and cannot change afterwards; build a new solution to change parameters.
///
/// Evaluation is pure, so a solution can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawdownSolution {
    aquifer: AquiferModel,
    boundary: Option<ImageBoundary<AquiferModel>>,
    skin: Option<Skin>,
}

impl DrawdownSolution {
    /// Builds a drawdown solution.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the boundary or skin configuration is invalid.
    pub fn new(
        kind: SolutionKind,
        params: AquiferParameters,
        boundary: BoundaryConfig,
        skin: SkinConfig,
    ) -> Result<Self, ConfigError> {
        let aquifer = kind.build(params);
        let boundary = boundary.resolve(aquifer)?;
        let skin = skin.resolve(&params)?;

        Ok(Self {
            aquifer,
            boundary,
            skin,
        })
    }

    /// Builds a drawdown solution from a flat configuration record.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown names, invalid parameters,
    /// a boundary without a distance, or an inconsistent skin specification.
    pub fn from_config(config: &DrawdownConfig) -> Result<Self, ConfigError> {
        let (kind, params, boundary, skin) = config.resolve()?;
        Self::new(kind, params, boundary, skin)
    }

    /// Returns the base solution kind.
    #[must_use]
    pub fn kind(&self) -> SolutionKind {
        self.aquifer.kind()
    }

    /// Returns the aquifer parameters.
    #[must_use]
    pub fn parameters(&self) -> &AquiferParameters {
        self.aquifer.parameters()
    }

    /// Returns the base aquifer solution.
    #[must_use]
    pub fn aquifer(&self) -> &AquiferModel {
        &self.aquifer
    }

    /// Returns the boundary, if one is configured.
    #[must_use]
    pub fn boundary(&self) -> Option<&ImageBoundary<AquiferModel>> {
        self.boundary.as_ref()
    }

    /// Returns the skin, if a nonzero skin is configured.
    #[must_use]
    pub fn skin(&self) -> Option<&Skin> {
        self.skin.as_ref()
    }

    /// Computes total drawdown for scalar or sequence arguments.
    ///
    /// The result has the broadcast shape of the arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawdownError`] if sequence lengths differ, a point lies
    /// outside the domain, or a point lies past the boundary's mirror line.
    /// Every point is checked before any drawdown is computed.
    pub fn compute_drawdown(
        &self,
        q: impl Into<Broadcast<VolumeRate>>,
        r: impl Into<Broadcast<Length>>,
        t: impl Into<Broadcast<Time>>,
    ) -> Result<Broadcast<Length>, DrawdownError> {
        self.evaluate(WellTestQuery::new(q, r, t))
    }

    /// Computes total drawdown for a query.
    ///
    /// # Errors
    ///
    /// See [`DrawdownSolution::compute_drawdown`].
    pub fn evaluate(&self, query: WellTestQuery) -> Result<Broadcast<Length>, DrawdownError> {
        evaluate(
            query,
            |index, point| self.check(index, point),
            |point| self.total_at(point),
        )
    }

    /// Computes total drawdown at a single validated point.
    ///
    /// # Errors
    ///
    /// Returns [`DrawdownError::ImageBeyondBoundary`] if the point lies past
    /// the boundary's mirror line.
    pub fn drawdown_at_point(&self, point: &QueryPoint) -> Result<Length, DrawdownError> {
        self.check(0, point)?;
        Ok(self.total_at(point))
    }

    /// Finds the elapsed time at which drawdown at `(q, r)` reaches `target`.
    ///
    /// Bisects on `log10(t)` within the configured time bracket.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenDrawdownError`] if the point is invalid, the target is
    /// not reached within the bracket, or the solver fails to converge.
    pub fn time_to_drawdown(
        &self,
        q: VolumeRate,
        r: Length,
        target: Length,
        config: GivenDrawdownConfig,
    ) -> Result<TimedDrawdown, GivenDrawdownError> {
        given_drawdown(self, q, r, target, config)
    }

    fn check(&self, index: usize, point: &QueryPoint) -> Result<(), DrawdownError> {
        match &self.boundary {
            Some(boundary) => boundary.check(index, point),
            None => Ok(()),
        }
    }

    fn total_at(&self, point: &QueryPoint) -> Length {
        let own = self.aquifer.point_drawdown(point);
        let image = self
            .boundary
            .as_ref()
            .map(|boundary| boundary.point_drawdown(point));
        let skin = self.skin.as_ref().map(|skin| skin.point_drawdown(point));

        [image, skin].into_iter().flatten().fold(own, |total, s| total + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Ratio, length::meter, ratio::ratio};

    use crate::support::{constraint::ConstraintError, units::transmissivity};

    use super::test_support::{m3s, meters, reference_aquifer, seconds};

    fn solution(boundary: BoundaryConfig, skin: SkinConfig) -> DrawdownSolution {
        DrawdownSolution::new(SolutionKind::Theis, reference_aquifer(), boundary, skin)
            .expect("solution should build")
    }

    fn scalar(result: Result<Broadcast<Length>, DrawdownError>) -> f64 {
        result
            .expect("evaluation should succeed")
            .into_scalar()
            .expect("scalar query should give a scalar")
            .get::<meter>()
    }

    #[test]
    fn plain_solution_matches_theis() {
        let plain = solution(BoundaryConfig::none(), SkinConfig::default());
        let theis = Theis::new(reference_aquifer());

        assert!(plain.boundary().is_none());
        assert!(plain.skin().is_none());

        for (r, t) in [(0.1, 1.0), (10.0, 3600.0), (400.0, 2e7), (5000.0, 1e9)] {
            assert_eq!(
                scalar(plain.compute_drawdown(m3s(0.2), meters(r), seconds(t))),
                scalar(theis.compute_drawdown(m3s(0.2), meters(r), seconds(t))),
            );
        }
    }

    #[test]
    fn reference_value() {
        let plain = solution(BoundaryConfig::none(), SkinConfig::default());
        let s = scalar(plain.compute_drawdown(m3s(0.2), meters(400.0), seconds(2e4)));

        // q / (4π·T) · E1(0.002)
        let expected = 0.2 / (4.0 * std::f64::consts::PI * 1e-3) * 5.639_391_433_964_937;
        assert_relative_eq!(s, expected, max_relative = 1e-6);

        // Late time, u = 2e-6: q / (4π·T) · E1(2e-6)
        let late = scalar(plain.compute_drawdown(m3s(0.2), meters(400.0), seconds(2e7)));
        assert_relative_eq!(late, 199.662_258_857_253_05, max_relative = 1e-9);
    }

    #[test]
    fn linear_in_flow_rate() {
        let composed = solution(BoundaryConfig::no_flow(meters(300.0)), SkinConfig::factor(2.0));

        for k in [-2.0, 0.5, 3.0] {
            let base = scalar(composed.compute_drawdown(m3s(0.1), meters(50.0), seconds(1e5)));
            let scaled =
                scalar(composed.compute_drawdown(m3s(0.1 * k), meters(50.0), seconds(1e5)));
            assert_relative_eq!(scaled, k * base, max_relative = 1e-12);
        }
    }

    #[test]
    fn boundaries_bracket_the_infinite_aquifer() {
        let none = solution(BoundaryConfig::none(), SkinConfig::default());
        let recharge = solution(
            BoundaryConfig::constant_pressure(meters(200.0)),
            SkinConfig::default(),
        );
        let barrier = solution(BoundaryConfig::no_flow(meters(200.0)), SkinConfig::default());

        for (r, t) in [(1.0, 60.0), (50.0, 1e4), (150.0, 1e6), (300.0, 1e8)] {
            let (q, r, t) = (m3s(0.2), meters(r), seconds(t));
            let s_none = scalar(none.compute_drawdown(q, r, t));
            let s_recharge = scalar(recharge.compute_drawdown(q, r, t));
            let s_barrier = scalar(barrier.compute_drawdown(q, r, t));

            assert!(s_recharge <= s_none);
            assert!(s_barrier >= s_none);
        }
    }

    #[test]
    fn constant_pressure_boundary_holds_zero_drawdown() {
        let recharge = solution(
            BoundaryConfig::constant_pressure(meters(200.0)),
            SkinConfig::default(),
        );

        let s = scalar(recharge.compute_drawdown(m3s(0.2), meters(200.0), seconds(1e6)));
        assert_relative_eq!(s, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn skin_adds_a_constant_offset() {
        let plain = solution(BoundaryConfig::none(), SkinConfig::default());
        let skinned = solution(BoundaryConfig::none(), SkinConfig::factor(5.0));
        let offset = 0.2 / (2.0 * std::f64::consts::PI * 1e-3) * 5.0;

        for (r, t) in [(0.3, 10.0), (30.0, 1e4), (3000.0, 1e8)] {
            let s_plain = scalar(plain.compute_drawdown(m3s(0.2), meters(r), seconds(t)));
            let s_skin = scalar(skinned.compute_drawdown(m3s(0.2), meters(r), seconds(t)));
            assert_relative_eq!(s_skin - s_plain, offset, max_relative = 1e-9);
        }
    }

    #[test]
    fn vectorized_matches_scalar_calls() {
        let composed = solution(
            BoundaryConfig::constant_pressure(meters(1000.0)),
            SkinConfig::factor(1.5),
        );
        let radii = [0.3, 3.0, 30.0, 300.0, 1500.0];

        let series = composed
            .compute_drawdown(
                m3s(1e-3),
                radii.iter().copied().map(meters).collect::<Vec<_>>(),
                seconds(3.1536e7),
            )
            .unwrap()
            .into_vec();

        assert_eq!(series.len(), 5);
        for (r, s) in radii.into_iter().zip(series) {
            let expected =
                scalar(composed.compute_drawdown(m3s(1e-3), meters(r), seconds(3.1536e7)));
            assert_eq!(s.get::<meter>(), expected);
        }
    }

    #[test]
    fn shape_mismatch() {
        let plain = solution(BoundaryConfig::none(), SkinConfig::default());
        let err = plain
            .compute_drawdown(m3s(0.2), vec![meters(10.0); 3], vec![seconds(10.0); 5])
            .unwrap_err();

        assert!(matches!(err, DrawdownError::ShapeMismatch(ref e) if e.lengths == [3, 5]));
    }

    #[test]
    fn domain_errors() {
        let plain = solution(BoundaryConfig::none(), SkinConfig::default());

        assert!(matches!(
            plain.compute_drawdown(m3s(0.2), meters(10.0), seconds(0.0)),
            Err(DrawdownError::Domain {
                name: "elapsed time",
                source: ConstraintError::Zero,
                ..
            })
        ));
        assert!(matches!(
            plain.compute_drawdown(m3s(0.2), meters(0.0), seconds(10.0)),
            Err(DrawdownError::Domain {
                name: "radial distance",
                source: ConstraintError::Zero,
                ..
            })
        ));
    }

    #[test]
    fn invalid_aquifer_is_a_configuration_error() {
        assert!(matches!(
            AquiferParameters::new(transmissivity(0.0), Ratio::new::<ratio>(1e-6)),
            Err(ConfigError::InvalidParameter {
                name: "transmissivity",
                ..
            })
        ));
        assert!(matches!(
            AquiferParameters::new(transmissivity(1e-3), Ratio::new::<ratio>(0.0)),
            Err(ConfigError::InvalidParameter {
                name: "storativity",
                ..
            })
        ));
    }

    #[test]
    fn boundary_without_distance_fails_to_build() {
        let boundary = BoundaryConfig {
            kind: BoundaryKind::ConstantPressure,
            distance: None,
        };
        let result = DrawdownSolution::new(
            SolutionKind::Theis,
            reference_aquifer(),
            boundary,
            SkinConfig::default(),
        );

        assert_eq!(result, Err(ConfigError::MissingBoundaryDistance));
    }

    #[test]
    fn no_partial_results_past_the_boundary() {
        let recharge = solution(
            BoundaryConfig::constant_pressure(meters(100.0)),
            SkinConfig::default(),
        );

        let radii = vec![meters(10.0), meters(50.0), meters(250.0)];
        let err = recharge
            .compute_drawdown(m3s(0.2), radii, seconds(1e4))
            .unwrap_err();
        assert!(matches!(err, DrawdownError::ImageBeyondBoundary { index: 2, .. }));

        let point = QueryPoint::new(m3s(0.2), meters(250.0), seconds(1e4)).unwrap();
        assert!(recharge.drawdown_at_point(&point).is_err());
    }

    #[test]
    fn shared_across_threads() {
        let composed = solution(BoundaryConfig::no_flow(meters(500.0)), SkinConfig::factor(-1.0));
        let expected = scalar(composed.compute_drawdown(m3s(0.05), meters(20.0), seconds(1e5)));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        scalar(composed.compute_drawdown(m3s(0.05), meters(20.0), seconds(1e5)))
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
