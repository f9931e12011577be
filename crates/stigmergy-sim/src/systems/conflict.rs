//! Conflict resolver: cut over-reported targets down to the best
//! triangulating pair.
//!
//! Targets with two or fewer reporters are left alone.

use hecs::World;

use stigmergy_core::constants::MAX_SENSORS_PER_TARGET;
use stigmergy_core::enums::Phase;
use stigmergy_core::events::{EventKind, EventSink, PhaseEmitter};
use stigmergy_core::records::{Mutation, TrackReport};
use stigmergy_core::types::{PlatformId, Position, TargetId};

use crate::geometry::{self, PairScore};
use crate::reports::ReportSet;
use crate::roster;

/// Reporters of `target` paired with their current positions, in report order.
pub fn sensors_for(
    world: &World,
    reports: &ReportSet,
    target: TargetId,
) -> Vec<(PlatformId, Position)> {
    reports
        .reporters_of(target)
        .into_iter()
        .filter_map(|platform| {
            roster::platform_position(world, platform).map(|pos| (platform, pos))
        })
        .collect()
}

/// Score every reporter pair on `target` and flag zero-length lines of sight.
///
/// Returns `None` when the target is not over-reported.
pub fn best_pair_for(
    world: &World,
    reports: &ReportSet,
    target: TargetId,
    target_pos: &Position,
    events: &mut PhaseEmitter<'_>,
) -> Option<PairScore> {
    let sensors = sensors_for(world, reports, target);
    if sensors.len() <= MAX_SENSORS_PER_TARGET {
        return None;
    }
    let scores = geometry::score_pairs(&sensors, target_pos);
    for score in scores.iter().filter(|s| s.degenerate) {
        tracing::warn!(
            target: "stigmergy::conflict",
            target_id = target.0,
            first = score.first.0,
            second = score.second.0,
            "geometry.degenerate"
        );
        events.emit(EventKind::DegenerateGeometry {
            target,
            first: score.first,
            second: score.second,
        });
    }
    let best = geometry::best_pair(&scores)?;
    events.emit(EventKind::PairSelected {
        target,
        first: best.first,
        second: best.second,
        angle_deg: best.angle_deg,
        deviation_deg: best.deviation_deg(),
    });
    Some(best)
}

/// Keep only the best pair's reports on `target`.
pub fn resolve(
    world: &World,
    target: TargetId,
    target_pos: &Position,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    events: &mut PhaseEmitter<'_>,
) -> Option<PairScore> {
    let best = best_pair_for(world, reports, target, target_pos, events)?;
    for platform in reports.reporters_of(target) {
        if platform != best.first && platform != best.second {
            reports.remove(&TrackReport::new(platform, target), log);
        }
    }
    reports.insert(TrackReport::new(best.first, target), log);
    reports.insert(TrackReport::new(best.second, target), log);
    Some(best)
}

/// Resolve conflicts on every live target, in roster order.
pub fn run(
    world: &World,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    tick: u64,
    sink: &mut dyn EventSink,
) {
    let mut events = PhaseEmitter::new(sink, tick, Phase::ConflictResolution);
    for target in roster::live_targets(world) {
        resolve(world, target.id, &target.position, reports, log, &mut events);
    }
}
