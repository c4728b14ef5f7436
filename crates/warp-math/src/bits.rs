// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Power-of-two helpers on signed 32-bit integers.

/// Propagates the highest set bit into every lower position.
#[inline]
fn fold_high_bit(mut x: i32) -> i32 {
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x
}

/// Smallest power of two `>= x` for `0 < x <= 2^30`.
///
/// Positive inputs are decremented, folded (`x |= x >> 1`, `2`, `4`, `8`, `16`)
/// and incremented, so powers of two map to themselves. Non-positive inputs are
/// folded as-is: shifts are arithmetic and the final add wraps, so `0` yields
/// `1`, every negative input yields `0`, and inputs above `2^30` wrap to
/// `i32::MIN`.
pub fn next_power_of_two(x: i32) -> i32 {
    let seed = if x > 0 { x - 1 } else { x };
    fold_high_bit(seed).wrapping_add(1)
}

/// `true` exactly when `x` is a positive power of two.
pub fn is_power_of_two(x: i32) -> bool {
    x > 0 && (x & (x - 1)) == 0
}
