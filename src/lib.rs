//! Scalar root finding.
//!
//! Two solvers are provided:
//!
//! * [`solver::brent`] needs only the function and an interval over which it
//!   changes sign.  It always converges on a valid bracket.
//! * [`solver::newton_raphson`] needs the function, its first derivative and a
//!   starting guess.  It converges quadratically near a simple root but has no
//!   safeguards against divergence.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for how to
//! do this, including how to bind extra arguments that are forwarded to every
//! evaluation.  The `bracket` module scans an interval for sub-intervals that
//! are suitable starting brackets for Brent's method.
//!
//! # Examples
//! Using Brent's method:
//!
//! ```
//! use rootsolve::config::SolverConfig;
//! use rootsolve::solver::brent;
//! use rootsolve::wrap::RealFn;
//!
//! let in_f = |x: f64| x * x * x - x - 2.0;
//! let f = RealFn::new(&in_f);
//!
//! let root = brent(&f, 1.0, 2.0, &SolverConfig::default()).expect("root");
//! assert!((root.x - 1.52137970680457).abs() < 1e-6);
//! ```
//!
//! Using Newton-Raphson with an extra parameter:
//!
//! ```
//! use rootsolve::config::SolverConfig;
//! use rootsolve::solver::newton_raphson;
//! use rootsolve::wrap::RealFnAndFirstArgs;
//!
//! // x^2 - k and its derivative, k supplied separately
//! let in_f = |x: f64, k: &f64| x * x - k;
//! let in_df = |x: f64, _k: &f64| 2.0 * x;
//! let f = RealFnAndFirstArgs::new(&in_f, &in_df, 2.0);
//!
//! let cfg = SolverConfig::default().with_tol(1e-9);
//! let root = newton_raphson(&f, 1.0, &cfg).expect("root");
//! assert!((root.x - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

pub mod bracket;
pub mod config;
pub mod convergence;
pub mod solver;
pub mod wrap;
