//! Root finding algorithms.
//!
//! Functions typically have to be wrapped before use.  See the `wrap` module
//! for how to do this.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use rootsolve::config::SolverConfig;
//! use rootsolve::solver::newton_raphson;
//! use rootsolve::wrap::RealFnAndFirst;
//!
//! // function and its derivative
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let in_df = |x: f64| -2.0*x + 2.0;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! let cfg = SolverConfig::new(1e-9, 20);
//! let root = newton_raphson(&f, 3.0, &cfg).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root.x - 2.41421356237).abs() < 1e-9);
//! ```
//!
//! Using Brent's method:
//!
//! ```
//! use rootsolve::config::SolverConfig;
//! use rootsolve::solver::brent;
//! use rootsolve::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let root = brent(&f, 2.0, 3.0, &SolverConfig::new(1e-9, 100)).expect("root");
//! assert!((root.x - 2.41421356237).abs() < 1e-9);
//! ```

mod brent;
mod driver;

use thiserror::Error;
use tracing::debug;

use crate::config::SolverConfig;
use crate::convergence::DeltaX;
use crate::wrap::{RealDfEval, RealFnEval};
use driver::iterative_root_find;

pub use brent::brent;

/// Root finding error conditions.
///
/// To help with diagnostics, these errors typically return the last relevant
/// `x` position.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RootError {
    /// Function values at the interval ends do not have strictly opposite
    /// signs.
    #[error("root not bracketed: f({a})={f_a} and f({b})={f_b} must have opposite signs")]
    NotBracketed { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Derivative magnitude fell below the tolerance for a method that divides
    /// by it.
    #[error("derivative too small at x={x}: f'(x)={df}")]
    ZeroDerivative { x: f64, df: f64 },

    /// The solver computed a non-finite value for its next step.
    #[error("iterated to a non-finite value from x={x}")]
    IteratedToNaN { x: f64 },

    /// Iteration limit was reached.
    #[error("did not converge in {max_iter} iterations, last x={last_x}")]
    IterationLimit { max_iter: usize, last_x: f64 },
}

/// A converged root estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    /// Estimated root location.
    pub x: f64,

    /// Iteration (1-based) in which the stopping rule was met.
    pub iterations: usize,
}

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close to
/// the root this algorithm has quadratic convergence.  There is no protection
/// against divergence or cycling; poor guesses end in one of the errors.
///
/// Stops when two successive iterates are closer than `cfg.tol()`.  Fails with
/// `ZeroDerivative` as soon as `|f'(x)| < cfg.tol()`.
///
/// This algorithm requires the first derivative of f(x).
///
/// * If analytically computed derivatives are not available, or the root
///   can be bracketed, consider Brent's method.
pub fn newton_raphson<F>(f: &F, start: f64, cfg: &SolverConfig) -> Result<Root, RootError>
where
    F: RealFnEval + RealDfEval,
{
    let finish = DeltaX::new(cfg.tol());
    let iterate = |f: &F, x: f64| nr_iteration(f, x, cfg.tol());
    iterative_root_find(f, &iterate, start, &finish, cfg.max_iter())
}

/// Evaluate a single iteration for Newton's method.  Returns an error if the
/// derivative is smaller than `min_df`.  Returns (x_new, f(x)) otherwise.
fn nr_iteration<F>(f: &F, x: f64, min_df: f64) -> Result<(f64, f64), RootError>
where
    F: RealFnEval + RealDfEval,
{
    let f_x = f.eval_f(x);
    let df_x = f.eval_df(x);
    if df_x.abs() < min_df {
        debug!(x, df = df_x, "derivative below tolerance");
        return Err(RootError::ZeroDerivative { x, df: df_x });
    }

    let x_new = x - f_x / df_x;
    if !x_new.is_finite() {
        return Err(RootError::IteratedToNaN { x });
    }
    Ok((x_new, f_x))
}
