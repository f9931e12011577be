//! Error types.
//!
//! Only feed and configuration errors are fatal. Engagement errors are
//! expected outcomes inside the tick loop and never halt a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{PlatformId, TargetId, WeaponRef};

/// Failure to load an entity feed. Aborts the run before the first tick.
#[derive(Debug, Error)]
pub enum FeedParseError {
    #[error("failed to read entity feed from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse entity feed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    #[error("line {line}: data row appears before any section marker")]
    RowOutsideSection { line: usize },
    #[error("line {line}: weapon row references unknown platform {platform}")]
    UnknownPlatform { line: usize, platform: PlatformId },
    #[error("weapon record references unknown platform {0}")]
    OrphanWeapon(PlatformId),
    #[error("duplicate platform id {0}")]
    DuplicatePlatform(PlatformId),
    #[error("duplicate target id {0}")]
    DuplicateTarget(TargetId),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Invalid pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse pipeline config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read pipeline config from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidBound { field: &'static str, value: f64 },
    #[error("sensors_per_target must be at least 1")]
    NoSensorsPerTarget,
}

/// Recoverable engagement outcomes. The target stays in the pool.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngageError {
    #[error("no platform can reach target {target}")]
    NoCandidate { target: TargetId },
    #[error("weapon {} of platform {} was already consumed (target {})", .weapon.serial, .weapon.platform, .target)]
    AlreadyConsumed { weapon: WeaponRef, target: TargetId },
    #[error("platform {0} is not in the world")]
    UnknownPlatform(PlatformId),
    #[error("platform {0} is grounded and cannot fire")]
    Grounded(PlatformId),
    #[error("target {0} is not in the world")]
    UnknownTarget(TargetId),
}
