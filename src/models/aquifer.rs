//! Aquifer models.
//!
//! This module contains analytical models for groundwater and reservoir
//! flow in confined aquifers, starting with transient radial drawdown.

pub mod drawdown;
