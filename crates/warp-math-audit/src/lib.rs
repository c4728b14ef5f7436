// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Accuracy audit for `warp-math`.
//!
//! Each audit sweeps one operation over a configured grid and scores the
//! `Fast` backend against `Exact`. The binary wraps [`run`] with a CLI; the
//! library is exposed so tests and tooling can drive audits directly.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod report;
pub mod sweep;

use tracing::{info, warn};

pub use config::{AuditConfig, SweepRange};
pub use error::{AuditError, ConfigError};
pub use report::{AuditReport, Op, OpReport};

/// Validates `config` and runs the audits for `ops` in the given order.
pub fn run(config: &AuditConfig, ops: &[Op]) -> Result<AuditReport, AuditError> {
    config.validate()?;
    let mut reports = Vec::with_capacity(ops.len());
    for &op in ops {
        let report = match op {
            Op::InvSqrt => sweep::audit_inv_sqrt(&config.inv_sqrt),
            Op::Sqrt => sweep::audit_sqrt(&config.sqrt),
            Op::Atan2 => sweep::audit_atan2(&config.atan2),
            Op::Pow => sweep::audit_pow(&config.pow),
            Op::Floor => sweep::audit_floor(&config.floor),
        };
        if report.passed {
            info!(%op, max = report.max_error, samples = report.samples, "within threshold");
        } else {
            warn!(
                %op,
                max = report.max_error,
                threshold = report.threshold,
                worst = ?report.worst_input,
                "threshold exceeded"
            );
        }
        reports.push(report);
    }
    Ok(AuditReport {
        fast_math: warp_math::FAST_MATH,
        reports,
    })
}
