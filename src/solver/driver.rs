use tracing::{debug, trace};

use super::{Root, RootError};
use crate::convergence::IsConverged;

/// Driver for open (non-bracketing) iterative root finders.
///
/// The `iterate` function performs one step from `x` and returns
/// `(x_new, f(x))`.  Iteration stops when `finish` accepts the step, when
/// `iterate` fails, or after `max_iter` steps.
pub(crate) fn iterative_root_find<F, I, C>(
    f: &F,
    iterate: &I,
    start: f64,
    finish: &C,
    max_iter: usize,
) -> Result<Root, RootError>
where
    I: Fn(&F, f64) -> Result<(f64, f64), RootError>,
    C: IsConverged,
{
    assert!(start.is_finite());

    let mut x_pre = start;

    // stay inside maximum iteration count
    for iteration in 1..=max_iter {
        let (x_cur, f_pre) = match iterate(f, x_pre) {
            Ok(step) => step,
            Err(e) => {
                debug!(iteration, error = %e, "iteration failed");
                return Err(e);
            }
        };
        trace!(iteration, x = x_pre, f_x = f_pre, x_next = x_cur, "step");

        if finish.is_converged(x_pre, x_cur, f_pre) {
            debug!(root = x_cur, iterations = iteration, "converged");
            return Ok(Root {
                x: x_cur,
                iterations: iteration,
            });
        }

        x_pre = x_cur;
    }

    debug!(max_iter, last_x = x_pre, "iteration limit reached");
    Err(RootError::IterationLimit {
        max_iter,
        last_x: x_pre,
    })
}
