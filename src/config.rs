/// Solver configuration shared by all root finders.
///
/// `tol` is an absolute tolerance.  Brent's method applies it to both the
/// residual and the bracket width, Newton-Raphson to the step size and as the
/// smallest usable derivative magnitude.  It is always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    tol: f64,
    max_iter: usize,
}

impl SolverConfig {
    pub const DEFAULT_TOL: f64 = 1e-6;
    pub const DEFAULT_MAX_ITER: usize = 100;

    pub fn new(tol: f64, max_iter: usize) -> SolverConfig {
        assert!(tol > 0.0);
        assert!(tol.is_finite());
        SolverConfig { tol, max_iter }
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn with_tol(self, tol: f64) -> SolverConfig {
        SolverConfig::new(tol, self.max_iter)
    }

    pub fn with_max_iter(self, max_iter: usize) -> SolverConfig {
        SolverConfig { max_iter, ..self }
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            tol: SolverConfig::DEFAULT_TOL,
            max_iter: SolverConfig::DEFAULT_MAX_ITER,
        }
    }
}
