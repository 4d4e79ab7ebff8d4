use std::mem::swap;

use tracing::{debug, trace};

use super::{Root, RootError};
use crate::bracket::is_sign_change;
use crate::config::SolverConfig;
use crate::convergence::{IsConverged, ResidualOrWidth};
use crate::wrap::RealFnEval;

/// Root finding using Brent's method.
///
/// Combines bisection, the secant method and inverse quadratic interpolation.
/// Interpolated steps are only taken while they make enough progress,
/// otherwise the method bisects, so convergence is guaranteed for a
/// continuous function on a valid bracket.  No derivatives are needed.
///
/// `f(a)` and `f(b)` must have strictly opposite signs.  An endpoint that is
/// already an exact root does not count as a bracket.  The endpoints may be
/// given in either order.
///
/// Stops when `|f(x)| < cfg.tol()` or when the bracket is narrower than
/// `cfg.tol()`.
///
/// * If a derivative is available and a good guess is known, consider
///   Newton-Raphson.
pub fn brent<F>(f: &F, a: f64, b: f64, cfg: &SolverConfig) -> Result<Root, RootError>
where
    F: RealFnEval,
{
    assert!(a.is_finite() && b.is_finite());
    let finish = ResidualOrWidth::new(cfg.tol());

    let (mut a, mut b) = (a, b);
    let mut f_a = f.eval_f(a);
    let mut f_b = f.eval_f(b);

    // ensure we started with valid bracket
    if !is_sign_change(f_a, f_b) {
        debug!(a, b, f_a, f_b, "root not bracketed");
        return Err(RootError::NotBracketed { a, b, f_a, f_b });
    }

    // b is always the better estimate
    if f_a.abs() < f_b.abs() {
        swap(&mut a, &mut b);
        swap(&mut f_a, &mut f_b);
    }

    // previous and second previous iterates
    let mut c = a;
    let mut f_c = f_a;
    let mut d = a;
    let mut bisected = true;

    for iteration in 1..=cfg.max_iter() {
        if finish.is_converged(a, b, f_b) {
            debug!(root = b, iterations = iteration, "brent converged");
            return Ok(Root {
                x: b,
                iterations: iteration,
            });
        }

        let interpolated = if f_a != f_c && f_b != f_c {
            inverse_quadratic((a, f_a), (b, f_b), (c, f_c))
        } else {
            secant((a, f_a), (b, f_b))
        };

        let s = if is_rejected(interpolated, a, b, c, d, bisected) {
            bisected = true;
            (a + b) / 2.0
        } else {
            bisected = false;
            interpolated
        };
        trace!(iteration, a, b, c, s, bisected, "brent step");

        d = c;
        c = b;
        f_c = f_b;

        let f_s = f.eval_f(s);
        if is_sign_change(f_a, f_s) {
            b = s;
            f_b = f_s;
        } else {
            a = s;
            f_a = f_s;
        }

        if f_a.abs() < f_b.abs() {
            swap(&mut a, &mut b);
            swap(&mut f_a, &mut f_b);
        }
    }

    debug!(max_iter = cfg.max_iter(), last_x = b, "brent iteration limit reached");
    Err(RootError::IterationLimit {
        max_iter: cfg.max_iter(),
        last_x: b,
    })
}

/// Zero of the inverse parabola through three points with distinct values.
fn inverse_quadratic((a, f_a): (f64, f64), (b, f_b): (f64, f64), (c, f_c): (f64, f64)) -> f64 {
    a * f_b * f_c / ((f_a - f_b) * (f_a - f_c))
        + b * f_a * f_c / ((f_b - f_a) * (f_b - f_c))
        + c * f_a * f_b / ((f_c - f_a) * (f_c - f_b))
}

/// Zero of the line through two points with distinct values.
fn secant((a, f_a): (f64, f64), (b, f_b): (f64, f64)) -> f64 {
    b - f_b * (b - a) / (f_b - f_a)
}

/// Whether an interpolated candidate `s` must be replaced by a bisection.
///
/// `s` has to fall between `(3a+b)/4` and `b`, and has to move less than half
/// of the step before last (`|b-c|` right after a bisection, `|c-d|`
/// otherwise).
fn is_rejected(s: f64, a: f64, b: f64, c: f64, d: f64, bisected: bool) -> bool {
    let bound = (3.0 * a + b) / 4.0;
    let step = (s - b).abs();

    !s.is_finite()
        || s < bound.min(b)
        || s > bound.max(b)
        || (bisected && step >= (b - c).abs() / 2.0)
        || (!bisected && step >= (c - d).abs() / 2.0)
}
