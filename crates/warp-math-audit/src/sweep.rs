// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-operation sweeps comparing `Fast` against `Exact`.

use std::f64::consts::{PI, TAU};

use tracing::debug;
use warp_math::{Exact, Fast, MathBackend};

use crate::config::{Atan2Sweep, FloorSweep, PowSweep, RelSweep};
use crate::report::{Op, OpReport};

/// Running error statistics for one sweep.
#[derive(Debug, Default)]
struct ErrorStats {
    samples: u64,
    max: f64,
    sum: f64,
    worst_input: Vec<f32>,
}

impl ErrorStats {
    fn record(&mut self, err: f64, input: &[f32]) {
        self.samples += 1;
        self.sum += err;
        // A NaN error replaces any finite max.
        if self.samples == 1 || err > self.max || (err.is_nan() && !self.max.is_nan()) {
            self.max = err;
            self.worst_input = input.to_vec();
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self, op: Op, threshold: f64) -> OpReport {
        let mean = if self.samples == 0 {
            0.0
        } else {
            self.sum / self.samples as f64
        };
        let passed = self.max <= threshold;
        debug!(%op, samples = self.samples, max = self.max, mean, passed, "sweep finished");
        OpReport {
            op,
            samples: self.samples,
            max_error: self.max,
            mean_error: mean,
            worst_input: self.worst_input,
            threshold,
            passed,
        }
    }
}

fn relative_error(got: f32, expected: f32) -> f64 {
    let expected = f64::from(expected);
    (f64::from(got) - expected).abs() / expected.abs()
}

/// Distance between two angles on the circle, in `[0, π]`.
fn angular_error(got: f32, expected: f32) -> f64 {
    let d = (f64::from(got) - f64::from(expected)).abs() % TAU;
    if d > PI {
        TAU - d
    } else {
        d
    }
}

/// Relative error of `Fast::inv_sqrt`.
pub fn audit_inv_sqrt(cfg: &RelSweep) -> OpReport {
    let mut stats = ErrorStats::default();
    for x in cfg.range.samples() {
        stats.record(relative_error(Fast::inv_sqrt(x), Exact::inv_sqrt(x)), &[x]);
    }
    stats.finish(Op::InvSqrt, cfg.threshold)
}

/// Relative error of `Fast::sqrt`.
pub fn audit_sqrt(cfg: &RelSweep) -> OpReport {
    let mut stats = ErrorStats::default();
    for x in cfg.range.samples() {
        stats.record(relative_error(Fast::sqrt(x), Exact::sqrt(x)), &[x]);
    }
    stats.finish(Op::Sqrt, cfg.threshold)
}

/// Angular error of `Fast::atan2` around circles of the configured radii.
#[allow(clippy::cast_possible_truncation)]
pub fn audit_atan2(cfg: &Atan2Sweep) -> OpReport {
    let mut stats = ErrorStats::default();
    let step = TAU / f64::from(cfg.steps.max(1));
    for &radius in &cfg.radii {
        let radius = f64::from(radius);
        for i in 0..cfg.steps {
            let t = -PI + f64::from(i) * step;
            let y = (radius * t.sin()) as f32;
            let x = (radius * t.cos()) as f32;
            stats.record(angular_error(Fast::atan2(y, x), Exact::atan2(y, x)), &[y, x]);
        }
    }
    stats.finish(Op::Atan2, cfg.threshold)
}

/// Relative error of `Fast::pow` over the base × exponent grid.
pub fn audit_pow(cfg: &PowSweep) -> OpReport {
    let mut stats = ErrorStats::default();
    for a in cfg.base.samples() {
        for b in cfg.exponent.samples() {
            stats.record(relative_error(Fast::pow(a, b), Exact::pow(a, b)), &[a, b]);
        }
    }
    stats.finish(Op::Pow, cfg.threshold)
}

/// Integer distance between `Fast::floor` and `Exact::floor`.
pub fn audit_floor(cfg: &FloorSweep) -> OpReport {
    let mut stats = ErrorStats::default();
    for x in cfg.range.samples() {
        let diff = i64::from(Fast::floor(x)) - i64::from(Exact::floor(x));
        #[allow(clippy::cast_precision_loss)]
        let err = diff.unsigned_abs() as f64;
        stats.record(err, &[x]);
    }
    stats.finish(Op::Floor, cfg.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuditConfig, SweepRange};

    #[test]
    fn default_sweeps_pass() {
        let cfg = AuditConfig::default();
        for report in [
            audit_inv_sqrt(&cfg.inv_sqrt),
            audit_sqrt(&cfg.sqrt),
            audit_atan2(&cfg.atan2),
            audit_pow(&cfg.pow),
            audit_floor(&cfg.floor),
        ] {
            assert!(report.passed, "{report:?}");
            assert!(report.samples > 0);
        }
    }

    #[test]
    fn atan2_worst_case_is_about_half_a_degree() {
        let report = audit_atan2(&Atan2Sweep::default());
        assert_eq!(report.samples, 3 * 3_600);
        assert!(report.max_error > 0.009 && report.max_error < 0.011, "{report:?}");
        assert_eq!(report.worst_input.len(), 2);
    }

    #[test]
    fn floor_quirk_shows_up_as_single_step() {
        let cfg = FloorSweep {
            range: SweepRange::new(-2.0, 2.0, 9),
            threshold: 1.0,
        };
        let report = audit_floor(&cfg);
        // -2, -1 and 0 are the non-positive whole numbers in the grid.
        assert_eq!(report.max_error, 1.0);
        assert!((report.mean_error - 3.0 / 9.0).abs() < 1e-12);
        assert!(report.passed);
    }

    #[test]
    fn tight_threshold_fails() {
        let cfg = PowSweep {
            threshold: 1e-6,
            ..PowSweep::default()
        };
        assert!(!audit_pow(&cfg).passed);
    }

    #[test]
    fn angular_error_wraps() {
        assert!((angular_error(3.0, -3.0) - (TAU - 6.0)).abs() < 1e-12);
        assert_eq!(angular_error(1.0, 1.0), 0.0);
    }
}
