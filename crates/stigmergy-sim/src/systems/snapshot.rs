//! Snapshot system: queries the ECS world and builds a complete WorldSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use stigmergy_core::components::*;
use stigmergy_core::events::SimEvent;
use stigmergy_core::records::{EngagementRecord, Mutation};
use stigmergy_core::state::*;
use stigmergy_core::types::{Position, SimTime};

use crate::engagement::ScoreState;
use crate::reports::ReportSet;

/// Build a complete WorldSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    finished: bool,
    reports: &ReportSet,
    engagement_log: &[EngagementRecord],
    mutations: Vec<Mutation>,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        finished,
        platforms: build_platforms(world),
        targets: build_targets(world, reports),
        reports: reports.as_slice().to_vec(),
        engagements: engagement_log.to_vec(),
        mutations,
        events,
        score: score.view(),
    }
}

/// All platforms, grounded included, in roster order.
fn build_platforms(world: &World) -> Vec<PlatformView> {
    let mut views: Vec<(u32, PlatformView)> = world
        .query::<(&Platform, &Position, &Fuel, &WeaponBay)>()
        .iter()
        .map(|(_, (platform, pos, fuel, bay))| {
            (
                platform.roster_slot,
                PlatformView {
                    id: platform.id,
                    status: platform.status,
                    position: *pos,
                    fuel: fuel.pounds,
                    weapon_ranges: bay.weapons.iter().map(|w| w.range).collect(),
                },
            )
        })
        .collect();
    views.sort_by_key(|(slot, _)| *slot);
    views.into_iter().map(|(_, view)| view).collect()
}

fn build_targets(world: &World, reports: &ReportSet) -> Vec<TargetView> {
    let mut views: Vec<(u32, TargetView)> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(_, (target, pos))| {
            (
                target.roster_slot,
                TargetView {
                    id: target.id,
                    phase: target.phase,
                    position: *pos,
                    reporters: reports.reporters_of(target.id),
                },
            )
        })
        .collect();
    views.sort_by_key(|(slot, _)| *slot);
    views.into_iter().map(|(_, view)| view).collect()
}
