//! Grounding system: prune platforms whose fuel has run out.
//!
//! Runs right after movement, so a platform that hits zero fuel is out of
//! the roster before the track assigner sees it.

use hecs::World;

use stigmergy_core::components::{Fuel, Platform};
use stigmergy_core::enums::{Phase, PlatformStatus};
use stigmergy_core::events::{EventKind, EventSink, PhaseEmitter};
use stigmergy_core::records::Mutation;
use stigmergy_core::types::PlatformId;

use crate::engagement::ScoreState;
use crate::reports::ReportSet;
use crate::systems::assignment;

/// Ground every active platform with no fuel left. Returns the grounded ids.
pub fn run(
    world: &mut World,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    score: &mut ScoreState,
    tick: u64,
    sink: &mut dyn EventSink,
) -> Vec<PlatformId> {
    let mut grounded: Vec<(u32, PlatformId)> = Vec::new();
    for (_entity, (platform, fuel)) in world.query_mut::<(&mut Platform, &Fuel)>() {
        if platform.status == PlatformStatus::Active && fuel.pounds <= 0.0 {
            platform.status = PlatformStatus::Grounded;
            grounded.push((platform.roster_slot, platform.id));
        }
    }
    grounded.sort_by_key(|(slot, _)| *slot);

    let mut events = PhaseEmitter::new(sink, tick, Phase::Grounding);
    let mut ids = Vec::with_capacity(grounded.len());
    for (_, platform) in grounded {
        log.push(Mutation::PlatformGrounded { platform });
        let dropped_reports = reports.drop_platform(platform, log);
        score.platforms_grounded += 1;
        tracing::info!(
            target: "stigmergy::grounding",
            platform = platform.0,
            dropped_reports,
            tick,
            "platform.grounded"
        );
        events.emit(EventKind::PlatformGrounded {
            platform,
            dropped_reports,
        });
        ids.push(platform);
    }
    if !ids.is_empty() {
        assignment::refresh_target_phases(world, reports);
    }
    ids
}
