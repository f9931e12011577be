//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPhase {
    /// No active platform reports this target.
    #[default]
    Unassigned,
    /// At least one active platform reports this target.
    Tracked,
    /// A weapon has been selected against this target this tick.
    Engaged,
    /// Shot down; the entity is removed from the world.
    Destroyed,
}

/// Platform availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformStatus {
    #[default]
    Active,
    /// Fuel exhausted. Excluded from assignment and engagement for the rest of the run.
    Grounded,
}

/// Stage of the per-tick pipeline that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Movement,
    Grounding,
    Assignment,
    ConflictResolution,
    WeaponSelection,
    Engagement,
    Reallocation,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Movement => "movement",
            Phase::Grounding => "grounding",
            Phase::Assignment => "assignment",
            Phase::ConflictResolution => "conflict_resolution",
            Phase::WeaponSelection => "weapon_selection",
            Phase::Engagement => "engagement",
            Phase::Reallocation => "reallocation",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
