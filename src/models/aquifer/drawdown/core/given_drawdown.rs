//! Iterative solver for the time to reach a target drawdown.
//!
//! Drawdown at a fixed point grows monotonically with elapsed time for a
//! positive flow rate, so bisection on `log10(t)` brackets the answer
//! whenever the target lies between the drawdowns at the bracket ends.

mod config;
mod error;
mod problem;

pub use config::GivenDrawdownConfig;
pub use error::GivenDrawdownError;
pub use problem::TimedDrawdown;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, VolumeRate},
    length::meter,
    time::second,
};

use super::DrawdownSolution;

use problem::{GivenDrawdownModel, GivenDrawdownProblem};

/// Finds the elapsed time at which drawdown at `(q, r)` equals `target`.
///
/// # Errors
///
/// Returns [`GivenDrawdownError`] if the bracket is invalid, the point cannot
/// be evaluated, the target lies outside the bracketed drawdowns, or the
/// solver fails to converge.
pub(super) fn given_drawdown(
    solution: &DrawdownSolution,
    q: VolumeRate,
    r: Length,
    target: Length,
    config: GivenDrawdownConfig,
) -> Result<TimedDrawdown, GivenDrawdownError> {
    let (min_time, max_time) = (config.min_time, config.max_time);
    let (min_s, max_s) = (min_time.get::<second>(), max_time.get::<second>());
    if !(min_s > 0.0 && min_s < max_s && max_s.is_finite()) {
        return Err(GivenDrawdownError::InvalidBracket { min_time, max_time });
    }

    let model = GivenDrawdownModel::new(solution, q, r);
    let problem = GivenDrawdownProblem::new(target);

    let low = model.call(&min_time)?;
    let high = model.call(&max_time)?;
    let (low_residual, high_residual) = (problem.residual(&low), problem.residual(&high));
    let finite = low_residual.is_finite() && high_residual.is_finite();
    if !finite || low_residual * high_residual > 0.0 {
        return Err(GivenDrawdownError::NotBracketed {
            target,
            low: low.drawdown,
            high: high.drawdown,
        });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        config.log_bracket(),
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Treat evaluation failures as overshooting the target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenDrawdownError::MaxIters {
            residual: Length::new::<meter>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}
