// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Polynomial `atan2` that avoids the transcendental call.
//!
//! The angle is folded onto the octant pair around `π/4` (for `x >= 0`) or
//! `3π/4` (for `x < 0`) by the ratio `r ∈ [-1, 1]`, then a cubic in `r` recovers
//! the offset from that centre. The sign of `y` selects the half-plane.
//! Maximum absolute error over the full circle is about 0.0102 rad (0.58°).

use core::f32::consts::PI;

use crate::{Fast, MathBackend};

/// Added to `|y|` so `(0, 0)` does not evaluate `0 / 0`.
pub(crate) const ATAN2_Y_BIAS: f32 = 1e-10;

/// Cubic coefficient of the octant-pair fit.
pub(crate) const ATAN2_C3: f32 = 0.1963;

/// Linear coefficient of the octant-pair fit.
pub(crate) const ATAN2_C1: f32 = 0.9817;

/// Approximate `atan2(y, x)` in radians.
///
/// `(0, 0)` returns `π/2` rather than `0`, and `(+0, -1)` returns `π` while
/// `(-0, -1)` also returns `π` because only `y < 0` flips the sign.
pub(crate) fn fast_atan2(y: f32, x: f32) -> f32 {
    let abs_y = Fast::abs(y) + ATAN2_Y_BIAS;
    let angle = if x >= 0.0 {
        let r = (x - abs_y) / (x + abs_y);
        ATAN2_C3 * r * r * r - ATAN2_C1 * r + PI / 4.0
    } else {
        let r = (x + abs_y) / (abs_y - x);
        ATAN2_C3 * r * r * r - ATAN2_C1 * r + 3.0 * PI / 4.0
    };
    if y < 0.0 {
        -angle
    } else {
        angle
    }
}
