//! Track assigner: stigmergic round-robin mapping of targets to platforms.
//!
//! The report set is rebuilt from scratch each tick. Target `i` goes to
//! active platform `i mod n`, so rerunning with a shrunken roster still
//! spreads targets evenly across whoever is left.

use hecs::World;

use stigmergy_core::components::Target;
use stigmergy_core::enums::{Phase, TargetPhase};
use stigmergy_core::events::{EventKind, EventSink, PhaseEmitter};
use stigmergy_core::records::{Mutation, TrackReport};
use stigmergy_core::types::{PlatformId, TargetId};

use crate::reports::ReportSet;
use crate::roster;

/// Round-robin assignment of `targets` onto `platforms`.
///
/// Each target receives `sensors_per_target` consecutive platforms from a
/// rotating cursor (capped at the roster size, so a platform never
/// reports the same target twice). With one sensor per target this is
/// exactly `platforms[target_index % platforms.len()]`. Returns an empty
/// assignment when there are no platforms.
pub fn assign(
    platforms: &[PlatformId],
    targets: &[TargetId],
    sensors_per_target: usize,
) -> Vec<TrackReport> {
    if platforms.is_empty() {
        return Vec::new();
    }
    let per_target = sensors_per_target.clamp(1, platforms.len());
    let mut reports = Vec::with_capacity(targets.len() * per_target);
    let mut cursor = 0usize;
    for target in targets {
        for _ in 0..per_target {
            reports.push(TrackReport::new(
                platforms[cursor % platforms.len()],
                *target,
            ));
            cursor += 1;
        }
    }
    reports
}

/// Rebuild the report set from the current active roster.
pub fn run(
    world: &mut World,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    sensors_per_target: usize,
    tick: u64,
    phase: Phase,
    sink: &mut dyn EventSink,
) {
    let platforms: Vec<PlatformId> = roster::active_platforms(world)
        .iter()
        .map(|p| p.id)
        .collect();
    let targets: Vec<TargetId> = roster::live_targets(world).iter().map(|t| t.id).collect();

    let assigned = assign(&platforms, &targets, sensors_per_target);

    let mut events = PhaseEmitter::new(sink, tick, phase);
    if platforms.is_empty() {
        for target in &targets {
            events.emit(EventKind::TargetUnassigned { target: *target });
        }
    }
    for report in &assigned {
        let kind = if phase == Phase::Setup {
            EventKind::InitialReport {
                platform: report.platform,
                target: report.target,
            }
        } else {
            EventKind::ReportAssigned {
                platform: report.platform,
                target: report.target,
            }
        };
        events.emit(kind);
    }
    tracing::debug!(
        target: "stigmergy::assign",
        platforms = platforms.len(),
        targets = targets.len(),
        reports = assigned.len(),
        tick,
        "reports.rebuilt"
    );

    reports.rebuild(assigned, log);
    refresh_target_phases(world, reports);
}

/// Set each live target to `Tracked` or `Unassigned` from the report set.
pub fn refresh_target_phases(world: &mut World, reports: &ReportSet) {
    for (_entity, target) in world.query_mut::<&mut Target>() {
        if target.phase == TargetPhase::Destroyed {
            continue;
        }
        target.phase = if reports.reporters_of(target.id).is_empty() {
            TargetPhase::Unassigned
        } else {
            TargetPhase::Tracked
        };
    }
}
