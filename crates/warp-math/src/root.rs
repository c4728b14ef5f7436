// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bit-hack reciprocal square root and the square root derived from it.
//!
//! Strategy:
//! - reinterpret the float's bits as `i32`
//! - halve the exponent and flip its sign with `MAGIC - (i >> 1)`, which lands
//!   within a few percent of `1 / sqrt(x)`
//! - polish with four Newton-Raphson steps

/// Initial-guess constant for the reciprocal square root bit hack.
pub(crate) const INV_SQRT_MAGIC: i32 = 0x5f37_59df;

/// Newton-Raphson refinements applied after the bit-level guess.
pub(crate) const INV_SQRT_ITERATIONS: usize = 4;

/// Fast `1 / sqrt(x)`.
///
/// Only meaningful for positive finite `x`. Zero yields a large finite value,
/// negative or non-finite inputs yield garbage.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn fast_inv_sqrt(x: f32) -> f32 {
    let xhalf = 0.5 * x;
    let i = x.to_bits() as i32;
    let i = INV_SQRT_MAGIC.wrapping_sub(i >> 1);
    let mut y = f32::from_bits(i as u32);
    for _ in 0..INV_SQRT_ITERATIONS {
        y *= 1.5 - xhalf * y * y;
    }
    y
}

/// Fast `sqrt(x)` as the reciprocal of [`fast_inv_sqrt`].
///
/// Returns `0.0` only when the inverse root comes back as exactly zero.
pub(crate) fn fast_sqrt(x: f32) -> f32 {
    let inv = fast_inv_sqrt(x);
    if inv != 0.0 {
        1.0 / inv
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_before_refinement_is_within_a_few_percent() {
        // Same bit hack with the iterations stripped off.
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        fn raw_guess(x: f32) -> f32 {
            f32::from_bits(INV_SQRT_MAGIC.wrapping_sub((x.to_bits() as i32) >> 1) as u32)
        }
        for x in [0.25_f32, 1.0, 2.0, 10.0, 12345.0] {
            let exact = 1.0 / x.sqrt();
            let rel = ((raw_guess(x) - exact) / exact).abs();
            assert!(rel < 0.04, "x={x} rel={rel}");
        }
    }

    #[test]
    fn refined_result_is_at_float_precision() {
        for x in [0.5_f32, 3.0, 7.0, 1024.0, 9.0e9] {
            let exact = 1.0 / x.sqrt();
            let rel = ((fast_inv_sqrt(x) - exact) / exact).abs();
            assert!(rel < 1.0e-6, "x={x} rel={rel}");
        }
    }

    #[test]
    fn zero_does_not_hit_the_division_guard() {
        let inv = fast_inv_sqrt(0.0);
        assert!(inv.is_finite() && inv > 1.0e19);
        let root = fast_sqrt(0.0);
        assert!(root > 0.0 && root < 1.0e-19);
    }
}
