use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

/// Solver configuration for finding the time to a target drawdown.
#[derive(Debug, Clone, Copy)]
pub struct GivenDrawdownConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Lower end of the elapsed time bracket.
    pub min_time: Time,

    /// Upper end of the elapsed time bracket.
    pub max_time: Time,

    /// Absolute tolerance on `log10(t / 1 s)`.
    pub log_time_tol: f64,

    /// Absolute tolerance for the drawdown residual (achieved - target).
    pub drawdown_tol: Length,
}

impl Default for GivenDrawdownConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            min_time: Time::new::<second>(1.0),
            max_time: Time::new::<second>(1e12),
            log_time_tol: 1e-12,
            drawdown_tol: Length::new::<meter>(1e-9),
        }
    }
}

impl GivenDrawdownConfig {
    /// Returns the time bracket as `log10` seconds.
    pub(super) fn log_bracket(&self) -> [f64; 2] {
        [
            self.min_time.get::<second>().log10(),
            self.max_time.get::<second>().log10(),
        ]
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.log_time_tol,
            x_rel_tol: 0.0,
            residual_tol: self.drawdown_tol.get::<meter>(),
        }
    }
}
