//! Brackets and bracket scanning.
//!
//! A bracket is an interval whose endpoint values differ in sign.  For a
//! continuous function the Intermediate Value Theorem guarantees it holds at
//! least one root, which makes it a valid starting point for Brent's method.

use crate::wrap::RealFnEval;

/// Bounds represents the closed interval [a,b].
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    a: f64,
    b: f64,
}

impl Bounds {
    pub fn new(a: f64, b: f64) -> Bounds {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Bounds { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn middle(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    pub fn size(&self) -> f64 {
        self.b - self.a
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

/// Whether one value is strictly negative and the other strictly positive.
///
/// A zero or NaN is never on either side.  Equivalent to `lhs * rhs < 0.0`
/// except that it does not suffer from float underflow.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}

/// A root location found while scanning.
#[derive(Clone, Debug, PartialEq)]
pub enum Bracket {
    /// Window whose endpoint values have strictly opposite signs.  Can be
    /// handed to Brent's method as is.
    SignChange(Bounds),

    /// Scan point where the function evaluated to exactly zero.  No bracket
    /// is emitted for it, since Brent's method rejects an endpoint root.
    ExactRoot(f64),
}

/// Scans interval [a,b] and emits the first sign-change bracket or exact
/// root.  Without a continuity guarantee, a bracket might hold a singularity
/// instead of a root.
pub fn first_bracket<F>(f: &F, bounds: &Bounds, window_size: f64) -> Option<Bracket>
where
    F: RealFnEval,
{
    BracketGenerator::new(f, bounds.clone(), window_size).next()
}

/// Iterator over the sign-change brackets and exact roots of an interval.
///
/// The interval is walked in windows of `window_size`, the last window being
/// clipped to the interval end.  Each window whose endpoint values change sign
/// is yielded as `Bracket::SignChange`, each scan point with a zero value as
/// `Bracket::ExactRoot`, in order of position.  Roots closer together than the
/// window size can cancel out and go unreported.
pub struct BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    f: &'a F,
    bounds: Bounds,
    window_size: f64,
    win_a: f64,
    f_a: Option<f64>,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    pub fn new(f: &'a F, bounds: Bounds, window_size: f64) -> BracketGenerator<'a, F> {
        assert!(window_size > 0.0);
        assert!(window_size.is_finite());
        let win_a = bounds.a;
        BracketGenerator {
            f,
            bounds,
            window_size,
            win_a,
            f_a: None,
        }
    }
}

impl<'a, F> Iterator for BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    type Item = Bracket;

    fn next(&mut self) -> Option<Bracket> {
        let mut f_a = match self.f_a {
            Some(v) => v,
            None => {
                let v = self.f.eval_f(self.win_a);
                self.f_a = Some(v);
                if v == 0.0 {
                    return Some(Bracket::ExactRoot(self.win_a));
                }
                v
            }
        };

        while self.win_a < self.bounds.b {
            let win_b = (self.win_a + self.window_size).min(self.bounds.b);
            let f_b = self.f.eval_f(win_b);

            let win = Bounds {
                a: self.win_a,
                b: win_b,
            };

            // resume from the window end next time
            self.win_a = win_b;
            self.f_a = Some(f_b);

            if f_b == 0.0 {
                return Some(Bracket::ExactRoot(win_b));
            }

            // found root or singularity
            if is_sign_change(f_a, f_b) {
                return Some(Bracket::SignChange(win));
            }
            f_a = f_b;
        }
        None
    }
}
