// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Backend selection for the dual-implemented operations.
//!
//! `Fast` and `Exact` are zero-sized types implementing [`MathBackend`]. The
//! build picks one of them as [`Active`] through the `fast_math` feature; there
//! is no runtime switch and no mutable global.

use crate::{power, root, trig};

/// `true` when the crate was built with the `fast_math` feature, i.e. when
/// [`Active`] is [`Fast`].
pub const FAST_MATH: bool = cfg!(feature = "fast_math");

/// Backend compiled in as the target of the crate-level free functions.
#[cfg(feature = "fast_math")]
pub type Active = Fast;

/// Backend compiled in as the target of the crate-level free functions.
#[cfg(not(feature = "fast_math"))]
pub type Active = Exact;

/// Scalar operations that have both an approximate and a reference
/// implementation.
///
/// Implementations are stateless; every method is an associated function so
/// generic code can be written as `B::sqrt(x)` and monomorphised per backend.
pub trait MathBackend {
    /// Whether this backend uses the approximate algorithms.
    const FAST: bool;

    /// Absolute value.
    ///
    /// The fast backend returns `x` when `x > 0` and `-x` otherwise, so
    /// `+0.0` maps to `-0.0`, `-0.0` maps to `+0.0`, and NaN comes back
    /// negated rather than normalised.
    fn abs(x: f32) -> f32;

    /// Rounds toward negative infinity and converts to `i32`.
    ///
    /// The fast backend truncates and subtracts one for every non-positive
    /// input, which means `0.0` floors to `-1` and a negative whole number `n`
    /// floors to `n - 1`. Inputs outside the `i32` range saturate.
    fn floor(x: f32) -> i32;

    /// Square root.
    fn sqrt(x: f32) -> f32;

    /// Reciprocal square root, `1 / sqrt(x)`.
    fn inv_sqrt(x: f32) -> f32;

    /// Two-argument arctangent of `y / x` in radians.
    fn atan2(y: f32, x: f32) -> f32;

    /// `a` raised to the power `b`.
    fn pow(a: f32, b: f32) -> f32;
}

/// Approximate backend. Trades a bounded error for skipping transcendental
/// calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fast;

/// Reference backend. Routes through `libm` in double precision and rounds
/// back to `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl MathBackend for Fast {
    const FAST: bool = true;

    #[inline]
    fn abs(x: f32) -> f32 {
        if x > 0.0 {
            x
        } else {
            -x
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn floor(x: f32) -> i32 {
        if x > 0.0 {
            x as i32
        } else {
            (x as i32).wrapping_sub(1)
        }
    }

    #[inline]
    fn sqrt(x: f32) -> f32 {
        root::fast_sqrt(x)
    }

    #[inline]
    fn inv_sqrt(x: f32) -> f32 {
        root::fast_inv_sqrt(x)
    }

    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        trig::fast_atan2(y, x)
    }

    #[inline]
    fn pow(a: f32, b: f32) -> f32 {
        power::fast_pow(a, b)
    }
}

#[allow(clippy::cast_possible_truncation)]
impl MathBackend for Exact {
    const FAST: bool = false;

    #[inline]
    fn abs(x: f32) -> f32 {
        libm::fabsf(x)
    }

    #[inline]
    fn floor(x: f32) -> i32 {
        libm::floorf(x) as i32
    }

    #[inline]
    fn sqrt(x: f32) -> f32 {
        libm::sqrt(f64::from(x)) as f32
    }

    #[inline]
    fn inv_sqrt(x: f32) -> f32 {
        (1.0 / libm::sqrt(f64::from(x))) as f32
    }

    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        libm::atan2(f64::from(y), f64::from(x)) as f32
    }

    #[inline]
    fn pow(a: f32, b: f32) -> f32 {
        libm::pow(f64::from(a), f64::from(b)) as f32
    }
}
