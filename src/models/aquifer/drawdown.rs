//! Transient radial drawdown around a pumping well.
//!
//! This module provides a [`twine_core::Model`] implementation for drawdown
//! in a confined aquifer: the Theis solution, optionally combined with a
//! single linear boundary (image well) and wellbore skin.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use uom::si::{
//!     f64::{Length, Time, VolumeRate},
//!     length::meter,
//!     time::second,
//!     volume_rate::cubic_meter_per_second,
//! };
//! use well_test_models::models::aquifer::drawdown::{DrawdownConfig, DrawdownSolution};
//!
//! let config = DrawdownConfig {
//!     boundary_kind: Some("no-flow".to_owned()),
//!     boundary_distance: Some(500.0),
//!     skin_factor: 2.0,
//!     ..DrawdownConfig::theis(1e-3, 1e-6)
//! };
//! let solution = DrawdownSolution::try_from(&config).unwrap();
//!
//! let radii = vec![Length::new::<meter>(10.0), Length::new::<meter>(100.0)];
//! let drawdown = solution
//!     .compute_drawdown(
//!         VolumeRate::new::<cubic_meter_per_second>(0.05),
//!         radii,
//!         Time::new::<second>(86_400.0),
//!     )
//!     .unwrap();
//!
//! let drawdown = drawdown.into_vec();
//! assert_eq!(drawdown.len(), 2);
//! assert!(drawdown[0] > drawdown[1]);
//! ```

mod core;

pub use self::core::{
    AquiferModel, AquiferParameters, AquiferSolution, BoundaryConfig, BoundaryKind, ConfigError,
    DrawdownConfig, DrawdownEffect, DrawdownError, DrawdownSolution, GivenDrawdownConfig,
    GivenDrawdownError, ImageBoundary, QueryPoint, Skin, SkinConfig, SolutionKind, Theis,
    TimedDrawdown, WellTestQuery,
};

use twine_core::Model;
use uom::si::f64::Length;

use crate::support::broadcast::Broadcast;

impl Model for DrawdownSolution {
    type Input = WellTestQuery;
    type Output = Broadcast<Length>;
    type Error = DrawdownError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input.clone())
    }
}
