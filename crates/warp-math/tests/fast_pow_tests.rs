// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use warp_math::{Exact, Fast, MathBackend};

/// Observed worst relative error for bases in [0.1, 100] and exponents in
/// [-3, 3] is ~1.84%.
const POW_REL_TOL: f32 = 0.025;

fn rel_err(got: f32, expected: f32) -> f32 {
    ((got - expected) / expected).abs()
}

#[test]
fn two_to_the_tenth() {
    let got = Fast::pow(2.0, 10.0);
    assert!(rel_err(got, 1024.0) < POW_REL_TOL, "got={got}");
    // Both corrections vanish for a power-of-two base and whole exponent.
    assert_eq!(got, 1024.0);
}

#[test]
fn zero_exponent_gives_one() {
    for a in [0.5_f32, 1.0, 3.0, 77.0] {
        let got = Fast::pow(a, 0.0);
        assert!(rel_err(got, 1.0) < POW_REL_TOL, "a={a} got={got}");
    }
}

#[test]
fn grid_within_tolerance() {
    let mut worst = 0.0_f32;
    for i in 0..200_u16 {
        let a = 0.1 + f32::from(i) * 0.5;
        for j in 0..=60_u16 {
            let b = -3.0 + f32::from(j) * 0.1;
            worst = worst.max(rel_err(Fast::pow(a, b), Exact::pow(a, b)));
        }
    }
    assert!(worst < POW_REL_TOL, "worst={worst}");
}

#[test]
fn results_increase_with_exponent_for_large_bases() {
    let mut prev = Fast::pow(10.0, -2.0);
    for j in 1..=40_u16 {
        let b = -2.0 + f32::from(j) * 0.1;
        let next = Fast::pow(10.0, b);
        assert!(next > prev, "b={b} prev={prev} next={next}");
        prev = next;
    }
}

proptest! {
    #[test]
    fn arbitrary_inputs_within_tolerance(a in 0.1_f32..100.0_f32, b in -3.0_f32..3.0_f32) {
        let err = rel_err(Fast::pow(a, b), Exact::pow(a, b));
        prop_assert!(err < POW_REL_TOL, "a={} b={} err={}", a, b, err);
    }
}
