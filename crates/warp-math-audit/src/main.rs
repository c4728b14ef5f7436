// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! warp-math-audit
//!
//! Sweeps the fast `warp-math` backend against the exact one and reports the
//! worst observed error per operation. Exits non-zero when any operation
//! exceeds its threshold.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use warp_math_audit::{AuditConfig, AuditReport, Op};

#[derive(Parser, Debug)]
#[command(author, version, about = "Accuracy audit for warp-math fast paths")]
struct Cli {
    /// JSON config with sweep ranges and thresholds (defaults apply to missing fields)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the sample count of every sweep
    #[arg(long, global = true)]
    steps: Option<u32>,
    /// Emit the report as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
    /// Exit successfully even when a threshold is exceeded
    #[arg(long, global = true)]
    no_fail: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Audit every operation (default)
    Run,
    /// Audit a single operation
    Op {
        /// Operation to audit
        #[arg(value_enum)]
        op: Op,
    },
    /// Print the effective config as JSON
    ShowConfig,
}

fn load_config(cli: &Cli) -> Result<AuditConfig> {
    let config = match &cli.config {
        Some(path) => AuditConfig::load(path)
            .with_context(|| format!("loading audit config {}", path.display()))?,
        None => AuditConfig::default(),
    };
    Ok(match cli.steps {
        Some(steps) => config.with_steps(steps),
        None => config,
    })
}

fn emit(report: &AuditReport, json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", report.render_text())?;
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    let ops: Vec<Op> = match cli.command.as_ref().unwrap_or(&Command::Run) {
        Command::Run => Op::ALL.to_vec(),
        Command::Op { op } => vec![*op],
        Command::ShowConfig => {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &config)?;
            writeln!(out)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    info!(fast_math = warp_math::FAST_MATH, ops = ops.len(), "starting audit");
    let report = warp_math_audit::run(&config, &ops)?;
    emit(&report, cli.json)?;

    if report.passed() || cli.no_fail {
        Ok(ExitCode::SUCCESS)
    } else {
        for failed in report.failures() {
            error!(op = %failed.op, max = failed.max_error, threshold = failed.threshold, "audit failed");
        }
        Ok(ExitCode::FAILURE)
    }
}
