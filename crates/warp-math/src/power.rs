// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Approximate `pow` built on the binary32 layout.
//!
//! Read as an integer, a positive float's bits are roughly `(log2(a) + 127) *
//! 2^23`. The algorithm rescales that to an approximate `log2(a)`, corrects
//! the fractional part with a quadratic, multiplies by the exponent, applies
//! the inverse correction and writes the result back as a bit pattern.
//! Adapted from the dctsystems power approximation. Maximum relative error for
//! `a ∈ [0.1, 100]`, `b ∈ [-3, 3]` is about 1.8%.

use crate::{Fast, MathBackend};

/// `2^23`, the weight of the lowest exponent bit.
const MANTISSA_SCALE: f32 = 8_388_608.0;

/// binary32 exponent bias.
const EXPONENT_BIAS: f32 = 127.0;

/// Quadratic correction applied when taking the logarithm.
pub(crate) const LOG_CORRECTION: f32 = 0.346607;

/// Quadratic correction applied when exponentiating back.
pub(crate) const EXP_CORRECTION: f32 = 0.33971;

/// Fractional part as seen through the fast floor.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn fast_fract(v: f32) -> f32 {
    v - Fast::floor(v) as f32
}

/// Approximate `a^b` for positive `a`.
///
/// Non-positive `a`, NaN and infinities are not checked and produce garbage.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn fast_pow(a: f32, b: f32) -> f32 {
    let mut x = a.to_bits() as i32 as f32;
    x *= 1.0 / MANTISSA_SCALE;
    x -= EXPONENT_BIAS;

    let y = fast_fract(x);
    let b = b * (x + (y - y * y) * LOG_CORRECTION);

    let y = fast_fract(b);
    let y = (y - y * y) * EXP_CORRECTION;

    f32::from_bits(((b + EXPONENT_BIAS - y) * MANTISSA_SCALE) as i32 as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_log_and_exponent_are_exact() {
        // log2 of a power of two has no fractional part, and neither does the
        // product when the exponent is whole, so both corrections vanish.
        assert_eq!(fast_pow(2.0, 10.0), 1024.0);
        assert_eq!(fast_pow(4.0, 3.0), 64.0);
        assert_eq!(fast_pow(0.5, 2.0), 0.25);
        assert_eq!(fast_pow(2.0, -1.0), 0.5);
    }

    #[test]
    fn one_to_any_power_is_one() {
        for b in [-5.0_f32, -0.5, 0.0, 0.5, 7.0] {
            assert_eq!(fast_pow(1.0, b), 1.0, "b={b}");
        }
    }

    #[test]
    fn fractional_exponent_stays_close() {
        let got = fast_pow(2.0, 0.5);
        let rel = (got - core::f32::consts::SQRT_2).abs() / core::f32::consts::SQRT_2;
        assert!(rel < 0.01, "got={got} rel={rel}");
    }
}
