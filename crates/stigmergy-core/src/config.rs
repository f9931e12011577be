//! Pipeline configuration.
//!
//! One record parametrizes every variant of the allocation loop:
//! a static single-pass setup, a slowly drifting one, and the
//! fuel-limited one, all running through the same systems.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Half-width of the uniform per-axis platform displacement each tick.
    pub platform_jitter: f64,
    /// Half-width of the uniform per-axis target displacement each tick.
    pub target_jitter: f64,
    /// Burn fuel each tick and ground platforms that run dry.
    pub fuel_enabled: bool,
    /// Pounds burned per tick when `fuel_enabled`.
    pub fuel_burn_rate: f64,
    /// Run the make-before-break reallocation phase after engagements.
    pub reallocation_enabled: bool,
    /// Consecutive round-robin platforms assigned to each target.
    pub sensors_per_target: usize,
    /// Wall clock delay between ticks. Only the runner sleeps; the engine ignores it.
    pub pacing_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            platform_jitter: PLATFORM_JITTER,
            target_jitter: TARGET_JITTER,
            fuel_enabled: true,
            fuel_burn_rate: FUEL_BURN_RATE,
            reallocation_enabled: true,
            sensors_per_target: DEFAULT_SENSORS_PER_TARGET,
            pacing_ms: DEFAULT_PACING_MS,
        }
    }
}

impl PipelineConfig {
    /// Static geometry, no fuel burn.
    pub fn basic() -> Self {
        Self {
            platform_jitter: 0.0,
            target_jitter: 0.0,
            fuel_enabled: false,
            pacing_ms: 0,
            ..Self::default()
        }
    }

    /// Small drift, no fuel burn, slow pacing.
    pub fn moving() -> Self {
        Self {
            platform_jitter: 5.0,
            target_jitter: 3.0,
            fuel_enabled: false,
            pacing_ms: 2000,
            ..Self::default()
        }
    }

    /// Full drift with fuel depletion; no reallocation phase.
    pub fn fuel_aware() -> Self {
        Self {
            reallocation_enabled: false,
            ..Self::default()
        }
    }

    /// Look up a preset by name (`basic`, `moving`, `fuel-aware`, `full`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(Self::basic()),
            "moving" => Some(Self::moving()),
            "fuel-aware" | "fuel_aware" => Some(Self::fuel_aware()),
            "full" | "default" => Some(Self::default()),
            _ => None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("platform_jitter", self.platform_jitter),
            ("target_jitter", self.target_jitter),
            ("fuel_burn_rate", self.fuel_burn_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBound { field, value });
            }
        }
        if self.sensors_per_target == 0 {
            return Err(ConfigError::NoSensorsPerTarget);
        }
        Ok(())
    }
}
