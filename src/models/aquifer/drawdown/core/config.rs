use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::support::units::transmissivity;

use super::{
    AquiferParameters, BoundaryConfig, BoundaryKind, ConfigError, DrawdownSolution, SkinConfig,
    SolutionKind,
};

/// Flat drawdown configuration in SI base units.
///
/// Names are resolved and values validated when the record is converted into
/// a [`DrawdownSolution`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawdownConfig {
    /// Registered solution name, such as `"Theis"`.
    pub solution_kind: String,

    /// Aquifer transmissivity in m²/s.
    pub transmissivity: f64,

    /// Aquifer storativity.
    pub storativity: f64,

    /// Boundary kind name. Absent means no boundary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary_kind: Option<String>,

    /// Distance from the pumping well to the boundary in m.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boundary_distance: Option<f64>,

    /// Explicit skin factor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skin_factor: f64,

    /// Skin zone transmissivity in m²/s.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skin_transmissivity: Option<f64>,

    /// Skin zone outer radius in m.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skin_radius: Option<f64>,

    /// Well radius in m.
    #[cfg_attr(feature = "serde", serde(default))]
    pub well_radius: Option<f64>,
}

impl DrawdownConfig {
    /// A Theis configuration with no boundary and no skin.
    #[must_use]
    pub fn theis(transmissivity: f64, storativity: f64) -> Self {
        Self {
            solution_kind: SolutionKind::Theis.name().to_owned(),
            transmissivity,
            storativity,
            boundary_kind: None,
            boundary_distance: None,
            skin_factor: 0.0,
            skin_transmissivity: None,
            skin_radius: None,
            well_radius: None,
        }
    }

    pub(super) fn resolve(
        &self,
    ) -> Result<(SolutionKind, AquiferParameters, BoundaryConfig, SkinConfig), ConfigError> {
        let kind = self.solution_kind.parse()?;
        let params = AquiferParameters::new(
            transmissivity(self.transmissivity),
            Ratio::new::<ratio>(self.storativity),
        )?;

        Ok((kind, params, self.boundary()?, self.skin()?))
    }

    fn boundary(&self) -> Result<BoundaryConfig, ConfigError> {
        let kind = match &self.boundary_kind {
            Some(name) => name.parse()?,
            None => BoundaryKind::None,
        };

        Ok(BoundaryConfig {
            kind,
            distance: self.boundary_distance.map(Length::new::<meter>),
        })
    }

    fn skin(&self) -> Result<SkinConfig, ConfigError> {
        match (self.skin_transmissivity, self.skin_radius, self.well_radius) {
            (None, None, None) => Ok(SkinConfig::factor(self.skin_factor)),
            (Some(_), Some(_), Some(_)) if self.skin_factor != 0.0 => {
                Err(ConfigError::ConflictingSkin)
            }
            (Some(skin_transmissivity), Some(skin_radius), Some(well_radius)) => {
                Ok(SkinConfig::Geometry {
                    transmissivity: transmissivity(skin_transmissivity),
                    skin_radius: Length::new::<meter>(skin_radius),
                    well_radius: Length::new::<meter>(well_radius),
                })
            }
            _ => Err(ConfigError::IncompleteSkinGeometry),
        }
    }
}

impl TryFrom<&DrawdownConfig> for DrawdownSolution {
    type Error = ConfigError;

    fn try_from(config: &DrawdownConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

impl TryFrom<DrawdownConfig> for DrawdownSolution {
    type Error = ConfigError;

    fn try_from(config: DrawdownConfig) -> Result<Self, Self::Error> {
        Self::from_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn with_boundary(kind: &str, distance: Option<f64>) -> DrawdownConfig {
        DrawdownConfig {
            boundary_kind: Some(kind.to_owned()),
            boundary_distance: distance,
            ..DrawdownConfig::theis(1e-2, 1e-3)
        }
    }

    #[test]
    fn plain_theis() {
        let solution = DrawdownSolution::try_from(DrawdownConfig::theis(1e-2, 1e-3)).unwrap();

        assert_eq!(solution.kind(), SolutionKind::Theis);
        assert!(solution.boundary().is_none());
        assert!(solution.skin().is_none());
        assert_relative_eq!(solution.parameters().transmissivity().value, 1e-2);
    }

    #[test]
    fn well_test_setup() {
        let config = DrawdownConfig {
            skin_factor: 5.0,
            ..with_boundary("positive", Some(1000.0))
        };
        let solution = DrawdownSolution::from_config(&config).unwrap();

        let boundary = solution.boundary().expect("boundary should be configured");
        assert_eq!(boundary.kind(), BoundaryKind::ConstantPressure);
        assert_relative_eq!(boundary.distance().get::<meter>(), 1000.0);

        let skin = solution.skin().expect("skin should be configured");
        assert_relative_eq!(skin.factor().get::<ratio>(), 5.0);
    }

    #[test]
    fn names_are_resolved() {
        let unknown = DrawdownConfig {
            solution_kind: "Hantush".to_owned(),
            ..DrawdownConfig::theis(1e-2, 1e-3)
        };
        assert!(matches!(
            DrawdownSolution::try_from(&unknown),
            Err(ConfigError::UnknownSolution { .. })
        ));

        assert!(matches!(
            DrawdownSolution::try_from(with_boundary("leaky", Some(10.0))),
            Err(ConfigError::UnknownBoundary { .. })
        ));
    }

    #[test]
    fn boundary_distance_rules() {
        assert_eq!(
            DrawdownSolution::try_from(with_boundary("no-flow", None)),
            Err(ConfigError::MissingBoundaryDistance)
        );
        assert!(matches!(
            DrawdownSolution::try_from(with_boundary("no-flow", Some(-5.0))),
            Err(ConfigError::InvalidParameter {
                name: "boundary distance",
                source: ConstraintError::Negative,
            })
        ));

        let ignored = DrawdownSolution::try_from(with_boundary("none", Some(-5.0))).unwrap();
        assert!(ignored.boundary().is_none());
    }

    #[test]
    fn invalid_aquifer() {
        assert!(matches!(
            DrawdownSolution::try_from(DrawdownConfig::theis(-1.0, 1e-3)),
            Err(ConfigError::InvalidParameter {
                name: "transmissivity",
                ..
            })
        ));
        assert!(matches!(
            DrawdownSolution::try_from(DrawdownConfig::theis(1e-2, f64::NAN)),
            Err(ConfigError::InvalidParameter {
                name: "storativity",
                ..
            })
        ));
    }

    #[test]
    fn skin_geometry_rules() {
        let geometry = DrawdownConfig {
            skin_transmissivity: Some(5e-3),
            skin_radius: Some(1.0),
            well_radius: Some(0.1),
            ..DrawdownConfig::theis(1e-2, 1e-3)
        };
        let solution = DrawdownSolution::try_from(&geometry).unwrap();
        let skin = solution.skin().expect("skin should be configured");
        assert_relative_eq!(skin.factor().get::<ratio>(), 10.0_f64.ln(), max_relative = 1e-12);

        let partial = DrawdownConfig {
            well_radius: None,
            ..geometry.clone()
        };
        assert_eq!(
            DrawdownSolution::try_from(partial),
            Err(ConfigError::IncompleteSkinGeometry)
        );

        let conflicting = DrawdownConfig {
            skin_factor: 2.0,
            ..geometry
        };
        assert_eq!(
            DrawdownSolution::try_from(conflicting),
            Err(ConfigError::ConflictingSkin)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let config: DrawdownConfig = serde_json::from_str(
            r#"{
                "solution_kind": "Theis",
                "transmissivity": 0.01,
                "storativity": 0.001,
                "boundary_kind": "no-flow",
                "boundary_distance": 250.0
            }"#,
        )
        .unwrap();

        assert_eq!(config.skin_factor, 0.0);
        assert_eq!(config.well_radius, None);

        let solution = DrawdownSolution::try_from(&config).unwrap();
        assert_eq!(
            solution.boundary().map(|boundary| boundary.kind()),
            Some(BoundaryKind::NoFlow)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_field_names() {
        let value = serde_json::to_value(DrawdownConfig::theis(1e-3, 1e-6)).unwrap();

        assert_eq!(value["solution_kind"], "Theis");
        assert_eq!(value["transmissivity"], 1e-3);
        assert!(value["boundary_kind"].is_null());
    }
}
