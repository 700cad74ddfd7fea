//! Static registry of base aquifer solutions.

use std::{fmt, str::FromStr};

use uom::si::f64::Length;

use super::{
    AquiferParameters, ConfigError, Theis,
    query::QueryPoint,
    traits::{AquiferSolution, DrawdownEffect, sealed::PointDrawdown},
};

/// Registered base solutions, by name.
const REGISTRY: [(&str, SolutionKind); 1] = [("Theis", SolutionKind::Theis)];

/// Name of a registered base aquifer solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    /// The [`Theis`] solution for an infinite confined aquifer.
    #[default]
    Theis,
}

impl SolutionKind {
    /// Returns the registered name.
    #[must_use]
    pub fn name(self) -> &'static str {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("unregistered", |(name, _)| *name)
    }

    /// Returns the names of all registered solutions.
    pub fn registered() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(name, _)| *name)
    }

    /// Builds the base solution of this kind for an aquifer.
    #[must_use]
    pub fn build(self, params: AquiferParameters) -> AquiferModel {
        match self {
            Self::Theis => AquiferModel::Theis(Theis::new(params)),
        }
    }
}

impl FromStr for SolutionKind {
    type Err = ConfigError;

    /// Looks up a solution by name, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(name.trim()))
            .map(|(_, kind)| *kind)
            .ok_or_else(|| ConfigError::UnknownSolution {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A base aquifer solution selected from the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AquiferModel {
    /// Infinite confined aquifer.
    Theis(Theis),
}

impl AquiferModel {
    /// Returns the registry entry this solution was built from.
    #[must_use]
    pub fn kind(&self) -> SolutionKind {
        match self {
            Self::Theis(_) => SolutionKind::Theis,
        }
    }
}

impl PointDrawdown for AquiferModel {
    fn point_drawdown(&self, point: &QueryPoint) -> Length {
        match self {
            Self::Theis(theis) => theis.point_drawdown(point),
        }
    }
}

impl DrawdownEffect for AquiferModel {}

impl AquiferSolution for AquiferModel {
    fn parameters(&self) -> &AquiferParameters {
        match self {
            Self::Theis(theis) => theis.parameters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::aquifer::drawdown::core::test_support::reference_aquifer;

    #[test]
    fn lookup_by_name() {
        assert_eq!("Theis".parse::<SolutionKind>(), Ok(SolutionKind::Theis));
        assert_eq!("theis".parse::<SolutionKind>(), Ok(SolutionKind::Theis));
        assert_eq!(SolutionKind::Theis.to_string(), "Theis");
        assert_eq!(SolutionKind::registered().collect::<Vec<_>>(), vec!["Theis"]);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "Hantush".parse::<SolutionKind>(),
            Err(ConfigError::UnknownSolution {
                name: "Hantush".to_owned()
            })
        );
    }

    #[test]
    fn builds_registered_solution() {
        let model = SolutionKind::Theis.build(reference_aquifer());
        assert_eq!(model.kind(), SolutionKind::Theis);
        assert_eq!(model.parameters(), &reference_aquifer());
    }
}
