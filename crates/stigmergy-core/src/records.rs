//! Non-owning records that reference world entities by id.

use serde::{Deserialize, Serialize};

use crate::types::{PlatformId, TargetId, WeaponRef};

/// Assertion that `platform` currently senses `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackReport {
    pub platform: PlatformId,
    pub target: TargetId,
}

impl TrackReport {
    pub fn new(platform: PlatformId, target: TargetId) -> Self {
        Self { platform, target }
    }
}

/// A successful weapon release. Append-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub tick: u64,
    pub weapon: WeaponRef,
    pub target: TargetId,
    /// Weapon range, kept for narration once the weapon itself is gone.
    pub weapon_range: f64,
    /// Probability of Guide at the moment of selection.
    pub pg: f64,
}

impl EngagementRecord {
    pub fn platform(&self) -> PlatformId {
        self.weapon.platform
    }
}

/// One targeted change to world or report state, in commit order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Mutation {
    /// The report set was recomputed wholesale by the track assigner.
    ReportsRebuilt { count: usize },
    ReportAdded { report: TrackReport },
    /// Existing coverage verified before a dependent removal (make-before-break).
    ReportConfirmed { report: TrackReport },
    ReportRemoved { report: TrackReport },
    WeaponConsumed { weapon: WeaponRef },
    TargetDestroyed { target: TargetId },
    PlatformGrounded { platform: PlatformId },
}
