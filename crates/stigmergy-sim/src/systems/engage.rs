//! Engagement executor: weapon selection and release for every live target.

use hecs::World;

use stigmergy_core::components::{Platform, Target, WeaponBay};
use stigmergy_core::enums::{Phase, PlatformStatus, TargetPhase};
use stigmergy_core::error::EngageError;
use stigmergy_core::events::{EventKind, EventSink, PhaseEmitter};
use stigmergy_core::records::{EngagementRecord, Mutation};
use stigmergy_core::types::{TargetId, WeaponRef};

use crate::engagement::ScoreState;
use crate::reports::ReportSet;
use crate::roster;
use crate::systems::{assignment, weapon_select};

/// Fire `weapon` at `target`.
///
/// The weapon leaves its bay atomically. If it is already gone the call
/// fails with `AlreadyConsumed` and nothing else changes. On success the
/// engagement is logged and the target entity is despawned.
#[allow(clippy::too_many_arguments)]
pub fn engage(
    world: &mut World,
    weapon: WeaponRef,
    target: TargetId,
    tick: u64,
    pg: f64,
    log: &mut Vec<Mutation>,
    engagement_log: &mut Vec<EngagementRecord>,
    score: &mut ScoreState,
) -> Result<EngagementRecord, EngageError> {
    let platform_entity = roster::find_platform(world, weapon.platform)
        .ok_or(EngageError::UnknownPlatform(weapon.platform))?;
    let target_entity =
        roster::find_target(world, target).ok_or(EngageError::UnknownTarget(target))?;

    let fired = {
        let (platform, bay) = world
            .query_one_mut::<(&Platform, &mut WeaponBay)>(platform_entity)
            .map_err(|_| EngageError::UnknownPlatform(weapon.platform))?;
        if platform.status == PlatformStatus::Grounded {
            return Err(EngageError::Grounded(weapon.platform));
        }
        bay.take(weapon.serial)
            .ok_or(EngageError::AlreadyConsumed { weapon, target })?
    };
    log.push(Mutation::WeaponConsumed { weapon });

    let record = EngagementRecord {
        tick,
        weapon,
        target,
        weapon_range: fired.range,
        pg,
    };
    engagement_log.push(record);

    if let Ok(mut state) = world.get::<&mut Target>(target_entity) {
        state.phase = TargetPhase::Destroyed;
    }
    let _ = world.despawn(target_entity);
    log.push(Mutation::TargetDestroyed { target });

    score.weapons_fired += 1;
    score.targets_destroyed += 1;
    Ok(record)
}

/// Select and fire for each live target in roster order.
///
/// Inventories are re-read before every selection, so a weapon fired at
/// one target is never offered for the next.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    reports: &mut ReportSet,
    log: &mut Vec<Mutation>,
    engagement_log: &mut Vec<EngagementRecord>,
    score: &mut ScoreState,
    tick: u64,
    sink: &mut dyn EventSink,
) {
    for target in roster::live_targets(world) {
        let platforms = roster::active_platforms(world);
        let choice = {
            let mut events = PhaseEmitter::new(sink, tick, Phase::WeaponSelection);
            weapon_select::select(&platforms, &target, &mut events)
        };
        let choice = match choice {
            Ok(choice) => choice,
            Err(err) => {
                tracing::debug!(
                    target: "stigmergy::weapons",
                    target_id = target.id.0,
                    error = %err,
                    tick,
                    "weapon.no_candidate"
                );
                continue;
            }
        };

        if let Ok(mut state) = world.get::<&mut Target>(target.entity) {
            state.phase = TargetPhase::Engaged;
        }

        let mut events = PhaseEmitter::new(sink, tick, Phase::Engagement);
        match engage(
            world,
            choice.weapon,
            target.id,
            tick,
            choice.pg,
            log,
            engagement_log,
            score,
        ) {
            Ok(record) => {
                reports.drop_target(target.id, log);
                tracing::info!(
                    target: "stigmergy::engage",
                    target_id = target.id.0,
                    platform = record.platform().0,
                    weapon_range = record.weapon_range,
                    pg = record.pg,
                    tick,
                    "target.destroyed"
                );
                events.emit(EventKind::TargetDestroyed {
                    target: target.id,
                    platform: record.platform(),
                    weapon_range: record.weapon_range,
                });
            }
            Err(err) => {
                score.failed_engagements += 1;
                tracing::warn!(
                    target: "stigmergy::engage",
                    target_id = target.id.0,
                    error = %err,
                    tick,
                    "engagement.failed"
                );
                if let EngageError::AlreadyConsumed { weapon, .. } = err {
                    events.emit(EventKind::WeaponAlreadyConsumed {
                        platform: weapon.platform,
                        target: target.id,
                        weapon_range: choice.weapon_range,
                    });
                }
                assignment::refresh_target_phases(world, reports);
            }
        }
    }
}
