use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, Time};

use crate::models::aquifer::drawdown::core::DrawdownError;

/// Errors that can occur while solving for the time to a target drawdown.
#[derive(Debug, Error)]
pub enum GivenDrawdownError {
    /// Drawdown could not be evaluated at the requested point.
    #[error("drawdown evaluation failed")]
    Drawdown(#[from] DrawdownError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The configured time bracket is empty or not strictly positive.
    #[error("invalid time bracket: [{min_time:?}, {max_time:?}]")]
    InvalidBracket { min_time: Time, max_time: Time },

    /// The target drawdown is not reached anywhere within the time bracket.
    #[error("target drawdown {target:?} outside [{low:?}, {high:?}]")]
    NotBracketed {
        /// Requested drawdown.
        target: Length,

        /// Drawdown at the start of the bracket.
        low: Length,

        /// Drawdown at the end of the bracket.
        high: Length,
    },

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best drawdown residual achieved.
        residual: Length,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
