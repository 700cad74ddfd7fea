//! # Well Test Models
//!
//! Analytical well test models for confined radial aquifers, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it's useful across models or outside this crate.
//! Only utilities in [`support`] are part of the public API.

pub mod models;
pub mod support;
