// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sweep ranges and acceptance thresholds for the audit.
//!
//! Defaults encode the documented error bounds of the fast backend. A JSON
//! file may override any subset of fields; missing fields keep their default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuditError, ConfigError};

/// Inclusive, evenly spaced sample grid over `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    /// First sample.
    pub start: f32,
    /// Last sample.
    pub end: f32,
    /// Number of samples, including both endpoints.
    pub steps: u32,
}

impl SweepRange {
    /// Creates a range without validating it.
    pub const fn new(start: f32, end: f32, steps: u32) -> Self {
        Self { start, end, steps }
    }

    /// Requires finite bounds, `start < end` and at least two steps.
    pub fn validate(&self, field: &'static str) -> Result<(), AuditError> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start < self.end
            && self.steps >= 2;
        if ok {
            Ok(())
        } else {
            Err(AuditError::InvalidRange {
                field,
                start: self.start,
                end: self.end,
                steps: self.steps,
            })
        }
    }

    /// Iterates the grid. Interpolation runs in f64 so the last sample is `end`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn samples(&self) -> impl Iterator<Item = f32> {
        let start = f64::from(self.start);
        let span = f64::from(self.end) - start;
        let last = f64::from(self.steps.saturating_sub(1).max(1));
        (0..self.steps).map(move |i| (start + span * f64::from(i) / last) as f32)
    }
}

/// Sweep of a single-argument operation scored by relative error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelSweep {
    /// Inputs to evaluate.
    pub range: SweepRange,
    /// Largest acceptable relative error.
    pub threshold: f64,
}

impl Default for RelSweep {
    fn default() -> Self {
        Self {
            range: SweepRange::new(1.0e-3, 1.0e6, 10_000),
            threshold: 1.0e-3,
        }
    }
}

/// Full-circle sweep for `atan2`, scored by absolute angular error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Atan2Sweep {
    /// Circle radii to sample at.
    pub radii: Vec<f32>,
    /// Angles per circle, evenly spaced over `[-π, π)`.
    pub steps: u32,
    /// Largest acceptable error in radians.
    pub threshold: f64,
}

impl Default for Atan2Sweep {
    fn default() -> Self {
        Self {
            radii: vec![0.01, 1.0, 100.0],
            steps: 3_600,
            threshold: 0.012,
        }
    }
}

/// Base × exponent grid for `pow`, scored by relative error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowSweep {
    /// Bases; only positive bases are in contract.
    pub base: SweepRange,
    /// Exponents.
    pub exponent: SweepRange,
    /// Largest acceptable relative error.
    pub threshold: f64,
}

impl Default for PowSweep {
    fn default() -> Self {
        Self {
            base: SweepRange::new(0.1, 100.0, 200),
            exponent: SweepRange::new(-3.0, 3.0, 61),
            threshold: 0.025,
        }
    }
}

/// Sweep for `floor`, scored by integer distance from the exact result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorSweep {
    /// Inputs to evaluate.
    pub range: SweepRange,
    /// Largest acceptable distance. The fast path is one below the exact
    /// result on non-positive whole numbers.
    pub threshold: f64,
}

impl Default for FloorSweep {
    fn default() -> Self {
        Self {
            range: SweepRange::new(-1_000.0, 1_000.0, 8_001),
            threshold: 1.0,
        }
    }
}

/// Complete audit configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Inverse square root sweep.
    pub inv_sqrt: RelSweep,
    /// Square root sweep.
    pub sqrt: RelSweep,
    /// Arctangent sweep.
    pub atan2: Atan2Sweep,
    /// Power sweep.
    pub pow: PowSweep,
    /// Floor sweep.
    pub floor: FloorSweep,
}

impl AuditConfig {
    /// Reads a JSON config file. Fields absent from the file keep defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        debug!(path = %path.display(), "loaded audit config");
        Ok(config)
    }

    /// Replaces the sample count of every sweep.
    ///
    /// `pow` uses the square root of `steps` per axis so the grid size stays
    /// comparable to the one-dimensional sweeps.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_lossless
    )]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.inv_sqrt.range.steps = steps;
        self.sqrt.range.steps = steps;
        self.atan2.steps = steps;
        self.floor.range.steps = steps;
        let per_axis = (f64::from(steps).sqrt().ceil() as u32).max(2);
        self.pow.base.steps = per_axis;
        self.pow.exponent.steps = per_axis;
        self
    }

    /// Checks every range and threshold before any sweep runs.
    pub fn validate(&self) -> Result<(), AuditError> {
        self.inv_sqrt.range.validate("inv_sqrt.range")?;
        self.sqrt.range.validate("sqrt.range")?;
        self.pow.base.validate("pow.base")?;
        self.pow.exponent.validate("pow.exponent")?;
        self.floor.range.validate("floor.range")?;
        if self.atan2.radii.is_empty() {
            return Err(AuditError::Empty("atan2.radii"));
        }
        if self.atan2.steps == 0 {
            return Err(AuditError::Empty("atan2.steps"));
        }
        for (field, value) in [
            ("inv_sqrt", self.inv_sqrt.threshold),
            ("sqrt", self.sqrt.threshold),
            ("atan2", self.atan2.threshold),
            ("pow", self.pow.threshold),
            ("floor", self.floor.threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AuditError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }
}
