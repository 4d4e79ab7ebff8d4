use rootsolve::bracket::{Bounds, Bracket, BracketGenerator};
use rootsolve::config::SolverConfig;
use rootsolve::solver::{brent, newton_raphson, RootError};
use rootsolve::wrap::{RealFn, RealFnAndFirstArgs, RealFnArgs};

use approx::assert_abs_diff_eq;

#[test]
fn test_end_to_end() {
    // roots at 0, pi, 2pi, ...
    let f_inner = |x: f64| x.sin();

    // rootsolve determines via traits what is f(x), df(x), etc.
    // the RealFn wrapper annotates our closure accordingly.
    let f = RealFn::new(&f_inner);

    // search for roots, starting right on the one at x=0
    let window_size = 0.1;
    let bounds = Bounds::new(0.0, 6.3);
    let cfg = SolverConfig::new(1e-12, 100);

    let mut roots = Vec::new();
    for found in BracketGenerator::new(&f, bounds, window_size) {
        match found {
            // find root using Brent's method
            Bracket::SignChange(b) => {
                let computed_root = brent(&f, b.a(), b.b(), &cfg).expect("found root");
                assert!(b.contains(computed_root.x));
                roots.push(computed_root.x);
            }
            Bracket::ExactRoot(x) => roots.push(x),
        }
    }

    // demonstrate that we found every root
    let pi = std::f64::consts::PI;
    assert_eq!(roots.len(), 3);
    for (i, computed_root) in roots.into_iter().enumerate() {
        let expected_root = (i as f64) * pi;
        assert!(
            (computed_root - expected_root).abs() < 1e-9,
            "got={}, wanted={}",
            computed_root,
            expected_root
        );
    }
}

#[test]
fn test_scan_hands_valid_brackets_to_brent() {
    // roots at -9, -2 and 0.5; the first two fall on scan points
    let f_inner = |x: f64| (x + 9.0) * (x + 2.0) * (x - 0.5);
    let f = RealFn::new(&f_inner);
    let cfg = SolverConfig::default();

    let mut exact = Vec::new();
    let mut solved = Vec::new();
    for found in BracketGenerator::new(&f, Bounds::new(-10.0, 10.0), 1.0) {
        match found {
            Bracket::SignChange(b) => {
                let root = brent(&f, b.a(), b.b(), &cfg).expect("generated bracket is valid");
                solved.push(root.x);
            }
            Bracket::ExactRoot(x) => {
                assert_eq!(f_inner(x), 0.0);
                exact.push(x);
            }
        }
    }

    assert_eq!(exact, vec![-9.0, -2.0]);
    assert_eq!(solved.len(), 1);
    assert_abs_diff_eq!(solved[0], 0.5, epsilon = 1e-6);
}

#[test]
fn test_shared_arguments() {
    // Kepler's equation M = E - e*sin(E), solved for E
    let kepler = |e_anom: f64, p: &(f64, f64)| e_anom - p.1 * e_anom.sin() - p.0;
    let kepler_d = |e_anom: f64, p: &(f64, f64)| 1.0 - p.1 * e_anom.cos();

    let cfg = SolverConfig::new(1e-12, 100);
    for &(mean_anom, ecc) in &[(0.5, 0.1), (1.0, 0.5), (3.0, 0.9)] {
        let f = RealFnArgs::new(&kepler, (mean_anom, ecc));
        let by_brent = brent(&f, 0.0, 2.0 * std::f64::consts::PI, &cfg).expect("brent root");

        let f = RealFnAndFirstArgs::new(&kepler, &kepler_d, (mean_anom, ecc));
        let by_newton = newton_raphson(&f, mean_anom, &cfg).expect("newton root");

        assert_abs_diff_eq!(by_brent.x, by_newton.x, epsilon = 1e-9);
        assert_abs_diff_eq!(
            by_brent.x - ecc * by_brent.x.sin(),
            mean_anom,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_concurrent_calls() {
    let f_inner = |x: f64, k: &f64| x * x - k;

    let roots: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (1..=8)
            .map(|k| {
                let f_inner = &f_inner;
                s.spawn(move || {
                    let f = RealFnArgs::new(f_inner, k as f64);
                    brent(&f, 0.0, 10.0, &SolverConfig::default())
                        .expect("found root")
                        .x
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread finished"))
            .collect()
    });

    for (k, root) in (1..=8).zip(roots) {
        assert_abs_diff_eq!(root, (k as f64).sqrt(), epsilon = 1e-6);
    }
}

#[test]
fn test_failures_are_reported() {
    let f_inner = |x: f64| x * x + 1.0;
    let f = RealFn::new(&f_inner);

    let err = brent(&f, -1.0, 1.0, &SolverConfig::default()).expect_err("no bracket");
    assert!(matches!(err, RootError::NotBracketed { .. }));
    assert!(err.to_string().starts_with("root not bracketed"));
}
