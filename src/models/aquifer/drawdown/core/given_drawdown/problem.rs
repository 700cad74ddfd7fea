//! Problem formulation for matching a target drawdown.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, Time, VolumeRate},
    length::meter,
    time::second,
};

use crate::models::aquifer::drawdown::core::{DrawdownError, DrawdownSolution, QueryPoint};

/// Drawdown reached at a given elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedDrawdown {
    /// Elapsed time since pumping started.
    pub time: Time,

    /// Total drawdown at that time.
    pub drawdown: Length,
}

/// Model adapter exposing elapsed time as the sole input.
///
/// Flow rate and radial distance are held fixed.
pub(super) struct GivenDrawdownModel<'a> {
    solution: &'a DrawdownSolution,
    q: VolumeRate,
    r: Length,
}

impl<'a> GivenDrawdownModel<'a> {
    pub(super) fn new(solution: &'a DrawdownSolution, q: VolumeRate, r: Length) -> Self {
        Self { solution, q, r }
    }
}

impl Model for GivenDrawdownModel<'_> {
    type Input = Time;
    type Output = TimedDrawdown;
    type Error = DrawdownError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let point = QueryPoint::new(self.q, self.r, *input)?;
        let drawdown = self.solution.drawdown_at_point(&point)?;

        Ok(TimedDrawdown {
            time: *input,
            drawdown,
        })
    }
}

/// Equation problem over `x = log10(t / 1 s)`.
///
/// Computes the residual as `achieved_drawdown - target_drawdown`.
pub(super) struct GivenDrawdownProblem {
    target: Length,
}

impl GivenDrawdownProblem {
    pub(super) fn new(target: Length) -> Self {
        Self { target }
    }

    pub(super) fn residual(&self, output: &TimedDrawdown) -> f64 {
        output.drawdown.get::<meter>() - self.target.get::<meter>()
    }
}

impl EquationProblem<1> for GivenDrawdownProblem {
    type Input = Time;
    type Output = TimedDrawdown;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Time::new::<second>(10.0_f64.powf(x[0])))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
