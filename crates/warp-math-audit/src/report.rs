// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Audit results and their text rendering.

use std::fmt::{self, Write as _};

use serde::Serialize;

/// Operation covered by an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// `inv_sqrt`, relative error.
    #[value(name = "inv_sqrt")]
    InvSqrt,
    /// `sqrt`, relative error.
    Sqrt,
    /// `atan2`, absolute angular error.
    Atan2,
    /// `pow`, relative error.
    Pow,
    /// `floor`, integer distance.
    Floor,
}

impl Op {
    /// Every audited operation in report order.
    pub const ALL: [Self; 5] = [Self::InvSqrt, Self::Sqrt, Self::Atan2, Self::Pow, Self::Floor];

    /// Name used in reports and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvSqrt => "inv_sqrt",
            Self::Sqrt => "sqrt",
            Self::Atan2 => "atan2",
            Self::Pow => "pow",
            Self::Floor => "floor",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error statistics of one operation over its sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpReport {
    /// Audited operation.
    pub op: Op,
    /// Number of evaluated inputs.
    pub samples: u64,
    /// Largest observed error.
    pub max_error: f64,
    /// Mean observed error.
    pub mean_error: f64,
    /// Arguments that produced `max_error`.
    pub worst_input: Vec<f32>,
    /// Acceptance bound for `max_error`.
    pub threshold: f64,
    /// `max_error <= threshold`.
    pub passed: bool,
}

/// Reports for every audited operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    /// Whether `warp-math` was built with `fast_math`; informational only,
    /// the audit always compares `Fast` against `Exact`.
    pub fast_math: bool,
    /// One entry per audited operation.
    pub reports: Vec<OpReport>,
}

impl AuditReport {
    /// `true` when every operation stayed within its threshold.
    pub fn passed(&self) -> bool {
        self.reports.iter().all(|r| r.passed)
    }

    /// Operations that exceeded their threshold.
    pub fn failures(&self) -> impl Iterator<Item = &OpReport> {
        self.reports.iter().filter(|r| !r.passed)
    }

    /// Fixed-width table, one row per operation.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<9} {:>8} {:>12} {:>12} {:>12}  {:<6} worst input",
            "op", "samples", "max", "mean", "threshold", "status"
        );
        for r in &self.reports {
            let worst = r
                .worst_input
                .iter()
                .map(|v| format!("{v:e}"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{:<9} {:>8} {:>12.4e} {:>12.4e} {:>12.4e}  {:<6} [{worst}]",
                r.op.name(),
                r.samples,
                r.max_error,
                r.mean_error,
                r.threshold,
                if r.passed { "ok" } else { "FAIL" },
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(op: Op, max_error: f64, threshold: f64) -> OpReport {
        OpReport {
            op,
            samples: 4,
            max_error,
            mean_error: max_error / 2.0,
            worst_input: vec![1.0, 2.0],
            threshold,
            passed: max_error <= threshold,
        }
    }

    #[test]
    fn any_failure_fails_the_audit() {
        let audit = AuditReport {
            fast_math: true,
            reports: vec![report(Op::Sqrt, 1e-7, 1e-3), report(Op::Pow, 0.5, 0.025)],
        };
        assert!(!audit.passed());
        let failed: Vec<Op> = audit.failures().map(|r| r.op).collect();
        assert_eq!(failed, vec![Op::Pow]);
    }

    #[test]
    fn text_table_has_a_row_per_op() {
        let audit = AuditReport {
            fast_math: true,
            reports: vec![report(Op::Atan2, 0.01, 0.012), report(Op::Floor, 2.0, 1.0)],
        };
        let text = audit.render_text();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("atan2"));
        assert!(text.contains("FAIL"));
    }

    #[test]
    fn json_uses_snake_case_op_names() {
        let json = serde_json::to_value(report(Op::InvSqrt, 0.0, 1.0)).unwrap_or_default();
        assert_eq!(json["op"], "inv_sqrt");
        assert_eq!(json["passed"], true);
    }
}
