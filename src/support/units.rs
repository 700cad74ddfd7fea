//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, time, volume rate).
//! This module provides quantities that are useful for aquifer modeling but
//! aren't included in [`uom`].
//!
//! ## Transmissivity
//!
//! [`Transmissivity`] (m²/s) is the product of hydraulic conductivity and
//! aquifer thickness. [`uom`] has no named quantity for it, so values are built
//! with [`transmissivity`] or by dividing an area by a time:
//!
//! ```
//! use uom::si::{area::square_meter, f64::{Area, Time}, time::second};
//! use well_test_models::support::units::{Transmissivity, transmissivity};
//!
//! let a: Transmissivity = Area::new::<square_meter>(1e-3) / Time::new::<second>(1.0);
//! let b = transmissivity(1e-3);
//! assert_eq!(a.value, b.value);
//! ```

mod quantities;

pub use quantities::{Transmissivity, transmissivity};
