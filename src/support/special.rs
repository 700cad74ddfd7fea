//! Special functions used by analytical flow solutions.

/// Euler–Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Iteration cap for the series and continued fraction.
const MAX_ITERS: u32 = 200;

/// Smallest representable magnitude used to seed the continued fraction.
const FPMIN: f64 = f64::MIN_POSITIVE / f64::EPSILON;

/// Exponential integral `E1(x) = ∫_x^∞ e^(-s) / s ds` for `x > 0`.
///
/// Uses the power series for `x ≤ 1` and a modified Lentz continued fraction
/// for `x > 1`, both converged to machine precision.
/// `E1(∞)` is zero, and large finite arguments underflow to zero.
///
/// Returns `NaN` for `x ≤ 0` or `NaN` input, where `E1` is undefined on the
/// real line. Callers validate their arguments before evaluation.
///
/// # Example
///
/// ```
/// use well_test_models::support::special::exp_int_e1;
///
/// assert!((exp_int_e1(1.0) - 0.219_383_934_395_520_3).abs() < 1e-15);
/// assert_eq!(exp_int_e1(f64::INFINITY), 0.0);
/// ```
#[must_use]
pub fn exp_int_e1(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 0.0;
    }

    if x <= 1.0 {
        series(x)
    } else {
        continued_fraction(x)
    }
}

/// `E1(x) = -γ - ln x - Σ_{k≥1} (-x)^k / (k·k!)`
fn series(x: f64) -> f64 {
    let mut sum = -x.ln() - EULER_GAMMA;
    let mut factor = 1.0;

    for k in 1..=MAX_ITERS {
        let k = f64::from(k);
        factor *= -x / k;
        let term = -factor / k;
        sum += term;
        if term.abs() < sum.abs() * f64::EPSILON {
            break;
        }
    }

    sum
}

/// `E1(x) = e^(-x) · 1/(x+1- 1/(x+3- 4/(x+5- ...)))`
fn continued_fraction(x: f64) -> f64 {
    let mut b = x + 1.0;
    let mut c = 1.0 / FPMIN;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..=MAX_ITERS {
        let i = f64::from(i);
        let a = -i * i;
        b += 2.0;
        d = 1.0 / (a * d + b);
        c = b + a / c;
        let delta = c * d;
        h *= delta;
        if (delta - 1.0).abs() < f64::EPSILON {
            break;
        }
    }

    h * (-x).exp()
}
