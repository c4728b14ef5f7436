// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use warp_math::{Exact, Fast, MathBackend};

/// Acceptance bound for the refined inverse root and the roots derived from it.
const REL_TOL: f32 = 1.0e-3;

const SAMPLES: [f32; 5] = [0.01, 1.0, 4.0, 100.0, 1.0e6];

fn rel_err(got: f32, expected: f32) -> f32 {
    ((got - expected) / expected).abs()
}

#[test]
fn inv_sqrt_squared_is_reciprocal() {
    for x in SAMPLES {
        let r = Fast::inv_sqrt(x);
        assert!(rel_err(r * r, 1.0 / x) < REL_TOL, "x={x} r={r}");
    }
}

#[test]
fn sqrt_tracks_exact_root() {
    for x in SAMPLES {
        let fast = Fast::sqrt(x);
        let exact = Exact::sqrt(x);
        assert!(rel_err(fast, exact) < REL_TOL, "x={x} fast={fast} exact={exact}");
    }
}

#[test]
fn sqrt_squared_round_trips() {
    for x in SAMPLES {
        let s = Fast::sqrt(x);
        assert!(rel_err(s * s, x) < REL_TOL, "x={x} s={s}");
    }
}

#[test]
fn sqrt_of_zero() {
    assert_eq!(Exact::sqrt(0.0), 0.0);
    // The bit hack maps zero to a large finite inverse root, so the fast
    // result is a tiny positive number rather than an exact zero.
    let fast = Fast::sqrt(0.0);
    assert!((0.0..1.0e-19).contains(&fast), "fast={fast}");
}

#[test]
fn perfect_squares_are_close_to_integral() {
    for n in 1..=64_u16 {
        let root = f32::from(n);
        let got = Fast::sqrt(root * root);
        assert!((got - root).abs() <= root * 1.0e-6, "n={n} got={got}");
    }
}

proptest! {
    #[test]
    fn inv_sqrt_within_tolerance(x in 1.0e-6_f32..1.0e12_f32) {
        let exact = Exact::inv_sqrt(x);
        prop_assert!(rel_err(Fast::inv_sqrt(x), exact) < REL_TOL);
        prop_assert!(rel_err(Fast::sqrt(x), Exact::sqrt(x)) < REL_TOL);
    }
}
