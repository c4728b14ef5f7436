// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! warp-math: fast approximate scalar and 2-vector primitives for the physics
//! loop, each with an exact fallback.
//!
//! Every dual-implemented operation exists in two backends:
//!
//! - [`Fast`]: bit-reinterpretation and polynomial approximations that avoid
//!   transcendental calls (`inv_sqrt`, `sqrt`, `atan2`, `pow`) plus
//!   branch-based `abs`/`floor`.
//! - [`Exact`]: reference routines backed by `libm`.
//!
//! The crate-level free functions ([`abs`], [`floor`], [`sqrt`], [`inv_sqrt`],
//! [`atan2`], [`pow`]) dispatch to [`Active`], which is selected at compile time
//! by the `fast_math` Cargo feature and reported by [`FAST_MATH`]. Callers that
//! need a specific branch regardless of the build can name the backend type
//! directly, e.g. `Exact::sqrt(x)`.
//!
//! None of the functions validate their inputs. Out-of-contract arguments
//! (non-positive values to `sqrt`/`inv_sqrt`/`pow`, degenerate ranges to
//! [`map`]/[`clamp`]) produce whatever the algorithm produces.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::float_cmp
)]

mod backend;
mod bits;
mod power;
mod root;
mod scalar;
mod trig;
mod vec2;

pub use backend::{Active, Exact, Fast, MathBackend, FAST_MATH};
pub use bits::{is_power_of_two, next_power_of_two};
pub use scalar::{clamp, map, max, min};
pub use vec2::Vec2;

/// Absolute value through the [`Active`] backend.
///
/// See [`MathBackend::abs`] for the fast-path sign-of-zero behaviour.
#[inline]
pub fn abs(x: f32) -> f32 {
    Active::abs(x)
}

/// Floor to `i32` through the [`Active`] backend.
#[inline]
pub fn floor(x: f32) -> i32 {
    Active::floor(x)
}

/// Square root through the [`Active`] backend.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    Active::sqrt(x)
}

/// Inverse square root through the [`Active`] backend.
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    Active::inv_sqrt(x)
}

/// Two-argument arctangent (`y`, `x`) through the [`Active`] backend.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    Active::atan2(y, x)
}

/// `a` raised to `b` through the [`Active`] backend.
#[inline]
pub fn pow(a: f32, b: f32) -> f32 {
    Active::pow(a, b)
}
