// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar;

/// 2D vector used by the clamp helpers.
///
/// * Components are plain `f32`; nothing is canonicalised.
/// * The type is `Copy`, so the `*_to_out` helpers read their inputs by value
///   and stay correct when `out` is the same storage as one of them.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    x: f32,
    y: f32,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.x
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.y
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Component-wise [`crate::min`].
    pub fn min(a: Self, b: Self) -> Self {
        Self::new(scalar::min(a.x, b.x), scalar::min(a.y, b.y))
    }

    /// Component-wise [`crate::max`].
    pub fn max(a: Self, b: Self) -> Self {
        Self::new(scalar::max(a.x, b.x), scalar::max(a.y, b.y))
    }

    /// Writes the component-wise minimum of `a` and `b` into `out`.
    pub fn min_to_out(a: Self, b: Self, out: &mut Self) {
        *out = Self::min(a, b);
    }

    /// Writes the component-wise maximum of `a` and `b` into `out`.
    pub fn max_to_out(a: Self, b: Self, out: &mut Self) {
        *out = Self::max(a, b);
    }

    /// Clamps each component of `a` into the matching `[low, high]` component
    /// range using the scalar [`crate::clamp`] rule, so a component whose
    /// `low > high` resolves to `low`.
    pub fn clamp(a: Self, low: Self, high: Self) -> Self {
        Self::max(low, Self::min(a, high))
    }

    /// Destination-writing form of [`Vec2::clamp`].
    ///
    /// `dest` may hold the same value as any input; both components are
    /// computed from the by-value inputs before `dest` is written.
    pub fn clamp_to_out(a: Self, low: Self, high: Self, dest: &mut Self) {
        Self::min_to_out(a, high, dest);
        let upper = *dest;
        Self::max_to_out(low, upper, dest);
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}
