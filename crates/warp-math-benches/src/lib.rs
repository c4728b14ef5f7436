// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared inputs for the warp-math benchmarks.

/// Deterministic batch of positive inputs spread over several decades.
#[allow(clippy::cast_precision_loss)]
pub fn positive_inputs(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n.max(1) as f32;
            0.01 + t * t * 1.0e4
        })
        .collect()
}

/// Deterministic batch of `(y, x)` pairs covering all four quadrants.
#[allow(clippy::cast_precision_loss)]
pub fn angle_inputs(n: usize) -> Vec<(f32, f32)> {
    (0..n)
        .map(|i| {
            let t = -std::f32::consts::PI + i as f32 * std::f32::consts::TAU / n.max(1) as f32;
            let r = 1.0 + (i % 7) as f32;
            (r * t.sin(), r * t.cos())
        })
        .collect()
}
