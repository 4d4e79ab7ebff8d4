//! Adapters giving user functions the evaluation traits the solvers need.
//!
//! Plain closures are wrapped with `RealFn` / `RealFnAndFirst`.  Functions
//! taking extra arguments, `f(x, &args)`, are wrapped with `RealFnArgs` /
//! `RealFnAndFirstArgs`, which own the arguments and forward them unchanged to
//! every evaluation.

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps functions to implement RealFnEval and RealDfEval.
pub struct RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub f: &'a F1,
    pub df: &'a F2,
}

impl<'a, F1, F2> RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2) -> RealFnAndFirst<'a, F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<'a, F1, F2> RealFnEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<'a, F1, F2> RealDfEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Wraps function taking extra arguments to implement RealFnEval.
pub struct RealFnArgs<'a, F, A>
where
    F: 'a + Fn(f64, &A) -> f64,
{
    pub f: &'a F,
    pub args: A,
}

impl<'a, F, A> RealFnArgs<'a, F, A>
where
    F: 'a + Fn(f64, &A) -> f64,
{
    pub fn new(f: &'a F, args: A) -> RealFnArgs<'a, F, A> {
        RealFnArgs { f, args }
    }
}

impl<'a, F, A> RealFnEval for RealFnArgs<'a, F, A>
where
    F: 'a + Fn(f64, &A) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x, &self.args)
    }
}

/// Wraps function and derivative sharing extra arguments to implement
/// RealFnEval and RealDfEval.
pub struct RealFnAndFirstArgs<'a, F1, F2, A>
where
    F1: 'a + Fn(f64, &A) -> f64,
    F2: 'a + Fn(f64, &A) -> f64,
{
    pub f: &'a F1,
    pub df: &'a F2,
    pub args: A,
}

impl<'a, F1, F2, A> RealFnAndFirstArgs<'a, F1, F2, A>
where
    F1: 'a + Fn(f64, &A) -> f64,
    F2: 'a + Fn(f64, &A) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2, args: A) -> RealFnAndFirstArgs<'a, F1, F2, A> {
        RealFnAndFirstArgs { f, df, args }
    }
}

impl<'a, F1, F2, A> RealFnEval for RealFnAndFirstArgs<'a, F1, F2, A>
where
    F1: 'a + Fn(f64, &A) -> f64,
    F2: 'a + Fn(f64, &A) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x, &self.args)
    }
}

impl<'a, F1, F2, A> RealDfEval for RealFnAndFirstArgs<'a, F1, F2, A>
where
    F1: 'a + Fn(f64, &A) -> f64,
    F2: 'a + Fn(f64, &A) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x, &self.args)
    }
}
