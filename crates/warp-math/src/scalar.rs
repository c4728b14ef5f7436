// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Comparison-based scalar helpers shared by both backends.
//!
//! These use strict comparisons and never special-case NaN, so their results
//! on ties and unordered inputs follow directly from operand order.

/// Larger of `a` and `b`; returns `b` when they compare equal or unordered.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of `a` and `b`; returns `b` when they compare equal or unordered.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Linearly remaps `val` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// Values outside the source range extrapolate. An empty source range divides
/// by zero and yields NaN or an infinity.
#[inline]
pub fn map(val: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let mult = (val - from_min) / (from_max - from_min);
    to_min + mult * (to_max - to_min)
}

/// Closest value to `a` within `[low, high]`, computed as
/// `max(low, min(a, high))`.
///
/// When `low > high` the outer `max` wins and the result is `low` for every
/// `a`.
#[inline]
pub fn clamp(a: f32, low: f32, high: f32) -> f32 {
    max(low, min(a, high))
}
