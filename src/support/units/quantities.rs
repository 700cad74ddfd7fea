use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Time},
        time::second,
    },
    typenum::{N1, P2, Z0},
};

/// Transmissivity, m²/s in SI.
pub type Transmissivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`Transmissivity`] from a value in m²/s.
#[must_use]
pub fn transmissivity(square_meters_per_second: f64) -> Transmissivity {
    Area::new::<square_meter>(square_meters_per_second) / Time::new::<second>(1.0)
}
