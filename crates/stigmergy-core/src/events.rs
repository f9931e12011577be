//! Structured progress events emitted by the simulation pipeline.
//!
//! Every decision the allocator makes is reported as a `SimEvent`
//! through an `EventSink`. The `Display` impl renders the classic
//! one-line narration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Phase;
use crate::types::{PlatformId, Position, TargetId};

/// One narration event: which pipeline phase, which tick, what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimEvent {
    pub tick: u64,
    pub phase: Phase,
    pub kind: EventKind,
}

/// Event payloads. Subjects are ids; metrics are the numbers behind a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    /// Round-robin assignment performed while loading the feed.
    InitialReport {
        platform: PlatformId,
        target: TargetId,
    },
    PlatformMoved {
        platform: PlatformId,
        position: Position,
        fuel: f64,
    },
    PlatformGrounded {
        platform: PlatformId,
        dropped_reports: usize,
    },
    ReportAssigned {
        platform: PlatformId,
        target: TargetId,
    },
    /// No active platforms are left to report this target.
    TargetUnassigned { target: TargetId },
    PairSelected {
        target: TargetId,
        first: PlatformId,
        second: PlatformId,
        angle_deg: f64,
        deviation_deg: f64,
    },
    /// A line of sight had zero length; the angle was clamped instead of computed.
    DegenerateGeometry {
        target: TargetId,
        first: PlatformId,
        second: PlatformId,
    },
    PgComputed {
        platform: PlatformId,
        target: TargetId,
        weapon_range: f64,
        distance: f64,
        kinematics: f64,
        expiring_factor: f64,
        fuel: f64,
        pg: f64,
    },
    WeaponSelected {
        platform: PlatformId,
        target: TargetId,
        weapon_range: f64,
        pg: f64,
    },
    NoCandidate { target: TargetId },
    TargetDestroyed {
        target: TargetId,
        platform: PlatformId,
        weapon_range: f64,
    },
    WeaponAlreadyConsumed {
        platform: PlatformId,
        target: TargetId,
        weapon_range: f64,
    },
    Handoff {
        target: TargetId,
        outgoing: PlatformId,
        incoming: PlatformId,
    },
    ReportReleased {
        platform: PlatformId,
        target: TargetId,
    },
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::InitialReport { platform, target } => {
                write!(f, "Plane {platform} is initially reporting Target {target}")
            }
            EventKind::PlatformMoved {
                platform,
                position,
                fuel,
            } => write!(
                f,
                "Plane {platform} moved to {position} and now has {fuel} pounds of fuel remaining"
            ),
            EventKind::PlatformGrounded {
                platform,
                dropped_reports,
            } => write!(
                f,
                "Plane {platform} has run out of fuel and is grounded ({dropped_reports} reports dropped)"
            ),
            EventKind::ReportAssigned { platform, target } => {
                write!(f, "Plane {platform} is reporting Target {target}")
            }
            EventKind::TargetUnassigned { target } => {
                write!(f, "Target {target} is unassigned: no active planes")
            }
            EventKind::PairSelected {
                target,
                first,
                second,
                deviation_deg,
                ..
            } => write!(
                f,
                "Selected best pair for Target {target}: Plane {first} and Plane {second} with angle {deviation_deg:.2} degrees"
            ),
            EventKind::DegenerateGeometry {
                target,
                first,
                second,
            } => write!(
                f,
                "Degenerate geometry for Target {target}: Plane {first} or Plane {second} is co-located with it"
            ),
            EventKind::PgComputed {
                platform,
                target,
                weapon_range,
                distance,
                kinematics,
                expiring_factor,
                fuel,
                pg,
            } => write!(
                f,
                "PG Calculation for Plane {platform} with weapon range {weapon_range} km and Target {target}: \
                 Distance = {distance:.2} km, Kinematics = {kinematics}, Expiring Factor = {expiring_factor}, \
                 Fuel = {fuel}, PG = {pg:.4}"
            ),
            EventKind::WeaponSelected {
                platform,
                target,
                weapon_range,
                pg,
            } => write!(
                f,
                "Selected best weapon for Target {target}: Plane {platform} with weapon range {weapon_range} km and PG {pg:.4}"
            ),
            EventKind::NoCandidate { target } => {
                write!(f, "No suitable weapon found for Target {target} with PG > 0")
            }
            EventKind::TargetDestroyed {
                target,
                platform,
                weapon_range,
            } => write!(
                f,
                "Target {target} shot down by Plane {platform} with weapon range {weapon_range} km"
            ),
            EventKind::WeaponAlreadyConsumed {
                platform,
                target,
                weapon_range,
            } => write!(
                f,
                "Plane {platform} is unable to fire weapon range {weapon_range} km for Target {target} because it has already been used"
            ),
            EventKind::Handoff {
                target,
                outgoing,
                incoming,
            } => write!(
                f,
                "Handoff: Plane {incoming} will take over reporting Target {target} from Plane {outgoing}"
            ),
            EventKind::ReportReleased { platform, target } => write!(
                f,
                "Plane {platform} stops reporting Target {target} to reduce redundancy"
            ),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[tick {} {}] {}", self.tick, self.phase, self.kind)
    }
}

/// Observer receiving the ordered event stream.
pub trait EventSink {
    fn emit(&mut self, event: SimEvent);
}

impl EventSink for Vec<SimEvent> {
    fn emit(&mut self, event: SimEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: SimEvent) {}
}

/// Convenience for systems: stamp tick + phase once, emit many kinds.
pub struct PhaseEmitter<'a> {
    sink: &'a mut dyn EventSink,
    tick: u64,
    phase: Phase,
}

impl<'a> PhaseEmitter<'a> {
    pub fn new(sink: &'a mut dyn EventSink, tick: u64, phase: Phase) -> Self {
        Self { sink, tick, phase }
    }

    pub fn emit(&mut self, kind: EventKind) {
        self.sink.emit(SimEvent {
            tick: self.tick,
            phase: self.phase,
            kind,
        });
    }
}
