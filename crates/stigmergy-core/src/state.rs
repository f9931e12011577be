//! World snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{PlatformStatus, TargetPhase};
use crate::events::SimEvent;
use crate::records::{EngagementRecord, Mutation, TrackReport};
use crate::types::{PlatformId, Position, SimTime, TargetId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    /// No targets or no active platforms remain.
    pub finished: bool,
    /// All platforms in roster order, grounded ones included.
    pub platforms: Vec<PlatformView>,
    /// Surviving targets in roster order.
    pub targets: Vec<TargetView>,
    pub reports: Vec<TrackReport>,
    /// Cumulative engagement log.
    pub engagements: Vec<EngagementRecord>,
    /// Mutations committed during this tick, in order.
    pub mutations: Vec<Mutation>,
    /// Events emitted during this tick, in order.
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformView {
    pub id: PlatformId,
    pub status: PlatformStatus,
    pub position: Position,
    pub fuel: f64,
    /// Ranges of the weapons still loaded, in bay order.
    pub weapon_ranges: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub phase: TargetPhase,
    pub position: Position,
    /// Platforms currently reporting this target.
    pub reporters: Vec<PlatformId>,
}

/// Running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub targets_total: u32,
    pub targets_destroyed: u32,
    pub weapons_fired: u32,
    pub platforms_grounded: u32,
    pub failed_engagements: u32,
}
