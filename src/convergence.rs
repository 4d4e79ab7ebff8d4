//! Stopping rules for the iterative solvers.

pub trait IsConverged {
    fn is_converged(&self, x_pre: f64, x_cur: f64, f_cur: f64) -> bool;
}

/// Converged once successive iterates are closer than `epsilon_abs`.
pub struct DeltaX {
    epsilon_abs: f64,
}

impl DeltaX {
    pub fn new(epsilon_abs: f64) -> DeltaX {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        DeltaX { epsilon_abs }
    }
}

impl IsConverged for DeltaX {
    fn is_converged(&self, x_pre: f64, x_cur: f64, _f_cur: f64) -> bool {
        (x_pre - x_cur).abs() < self.epsilon_abs
    }
}

/// Converged once either the residual `|f_cur|` or the distance between the
/// two points drops below `epsilon_abs`.  With bracketing solvers the two
/// points are the bracket endpoints, making the second test a width test.
pub struct ResidualOrWidth {
    epsilon_abs: f64,
}

impl ResidualOrWidth {
    pub fn new(epsilon_abs: f64) -> ResidualOrWidth {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        ResidualOrWidth { epsilon_abs }
    }
}

impl IsConverged for ResidualOrWidth {
    fn is_converged(&self, x_pre: f64, x_cur: f64, f_cur: f64) -> bool {
        f_cur.abs() < self.epsilon_abs || (x_pre - x_cur).abs() < self.epsilon_abs
    }
}
