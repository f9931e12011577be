//! Reallocation manager: make-before-break sensor handoff.
//!
//! For every redundant reporter on an over-covered target, the winning
//! pair's reports are committed (added or confirmed) before the
//! outgoing report is removed, so the target is never unreported.

use hecs::World;

use stigmergy_core::enums::Phase;
use stigmergy_core::events::{EventKind, EventSink, PhaseEmitter};
use stigmergy_core::records::{Mutation, TrackReport};
use stigmergy_core::types::{Position, TargetId};

use crate::geometry::PairScore;
use crate::reports::ReportSet;
use crate::roster;
use crate::systems::conflict;

/// Hand `target` off to its best pair. Returns the pair, or `None` when
/// the target has two or fewer reporters.
pub fn reallocate(
    world: &World,
    target: TargetId,
    target_pos: &Position,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    events: &mut PhaseEmitter<'_>,
) -> Option<PairScore> {
    let pair = conflict::best_pair_for(world, reports, target, target_pos, events)?;
    let keep = [
        TrackReport::new(pair.first, target),
        TrackReport::new(pair.second, target),
    ];

    for outgoing in reports.reporters_of(target) {
        if outgoing == pair.first || outgoing == pair.second {
            continue;
        }
        // make
        for report in keep {
            reports.ensure(report, log);
        }
        // break
        reports.remove(&TrackReport::new(outgoing, target), log);

        tracing::info!(
            target: "stigmergy::realloc",
            target_id = target.0,
            outgoing = outgoing.0,
            incoming = pair.first.0,
            "report.handoff"
        );
        events.emit(EventKind::Handoff {
            target,
            outgoing,
            incoming: pair.first,
        });
        events.emit(EventKind::ReportReleased {
            platform: outgoing,
            target,
        });
    }
    Some(pair)
}

/// Reallocate every live target, in roster order.
pub fn run(
    world: &World,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    tick: u64,
    sink: &mut dyn EventSink,
) {
    let mut events = PhaseEmitter::new(sink, tick, Phase::Reallocation);
    for target in roster::live_targets(world) {
        reallocate(world, target.id, &target.position, reports, log, &mut events);
    }
}
