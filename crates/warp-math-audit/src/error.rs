// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for the audit tool.

use thiserror::Error;

/// Failure while loading an audit config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid audit config.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failure while preparing or running an audit.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A sweep range cannot produce a sample grid.
    #[error("invalid sweep range `{field}`: start={start} end={end} steps={steps}")]
    InvalidRange {
        /// Dotted path of the offending range in the config.
        field: &'static str,
        /// Configured start.
        start: f32,
        /// Configured end.
        end: f32,
        /// Configured sample count.
        steps: u32,
    },
    /// A sweep needs at least one value in a list (e.g. atan2 radii).
    #[error("sweep `{0}` has no samples")]
    Empty(&'static str),
    /// An acceptance threshold is negative or not finite.
    #[error("invalid threshold for `{field}`: {value}")]
    InvalidThreshold {
        /// Operation whose threshold is invalid.
        field: &'static str,
        /// Configured value.
        value: f64,
    },
    /// Loading the config failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
