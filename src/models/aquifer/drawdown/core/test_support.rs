use uom::si::{
    f64::{Length, Ratio, Time, VolumeRate},
    length::meter,
    ratio::ratio,
    time::second,
    volume_rate::cubic_meter_per_second,
};

use crate::support::units::transmissivity;

use super::AquiferParameters;

/// Aquifer with T = 1e-3 m²/s and S = 1e-6.
pub(super) fn reference_aquifer() -> AquiferParameters {
    AquiferParameters::new(transmissivity(1e-3), Ratio::new::<ratio>(1e-6))
        .expect("reference aquifer should be valid")
}

pub(super) fn m3s(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(value)
}

pub(super) fn meters(value: f64) -> Length {
    Length::new::<meter>(value)
}

pub(super) fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}
