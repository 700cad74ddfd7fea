use std::f64::consts::PI;

use uom::si::{
    f64::Length, length::meter, ratio::ratio, time::second, volume_rate::cubic_meter_per_second,
};

use crate::support::special::exp_int_e1;

use super::{
    AquiferParameters,
    query::QueryPoint,
    traits::{AquiferSolution, DrawdownEffect, sealed::PointDrawdown},
};

/// Transient drawdown in an infinite confined aquifer (Theis, 1935).
///
/// ```text
/// u = r²·S / (4·T·t)
/// s = q / (4π·T) · E1(u)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theis {
    params: AquiferParameters,
}

impl Theis {
    /// Creates the Theis solution for an aquifer.
    #[must_use]
    pub fn new(params: AquiferParameters) -> Self {
        Self { params }
    }

    /// Returns the well function argument `u` at a point.
    ///
    /// Values that underflow are clamped to the smallest positive normal
    /// `f64`, keeping `E1(u)` finite.
    #[must_use]
    pub fn well_function_argument(&self, point: &QueryPoint) -> f64 {
        let r = point.r().get::<meter>();
        let t = point.t().get::<second>();
        let transmissivity = self.params.transmissivity().value;
        let storativity = self.params.storativity().get::<ratio>();

        let u = (r * r * storativity) / (4.0 * transmissivity * t);
        u.max(f64::MIN_POSITIVE)
    }
}

impl PointDrawdown for Theis {
    fn point_drawdown(&self, point: &QueryPoint) -> Length {
        let q = point.q().get::<cubic_meter_per_second>();
        let transmissivity = self.params.transmissivity().value;
        let u = self.well_function_argument(point);

        // Scale E1 first so a vanishing well function stays zero for any finite q.
        Length::new::<meter>(q * (exp_int_e1(u) / (4.0 * PI * transmissivity)))
    }
}

impl DrawdownEffect for Theis {}

impl AquiferSolution for Theis {
    fn parameters(&self) -> &AquiferParameters {
        &self.params
    }
}
