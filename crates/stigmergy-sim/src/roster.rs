//! Read-only roster views over the ECS world.
//!
//! hecs iteration order is not a stable contract, so every roster is
//! sorted by the feed slot recorded at spawn time.

use hecs::{Entity, World};

use stigmergy_core::components::{Fuel, Platform, Target, Weapon, WeaponBay};
use stigmergy_core::enums::PlatformStatus;
use stigmergy_core::types::{PlatformId, Position, TargetId};

/// Copy of an active platform's allocation-relevant state.
#[derive(Debug, Clone)]
pub struct PlatformEntry {
    pub entity: Entity,
    pub id: PlatformId,
    pub position: Position,
    pub fuel: f64,
    pub weapons: Vec<Weapon>,
}

#[derive(Debug, Clone)]
pub struct TargetEntry {
    pub entity: Entity,
    pub id: TargetId,
    pub position: Position,
}

/// Active (not grounded) platforms in roster order.
pub fn active_platforms(world: &World) -> Vec<PlatformEntry> {
    let mut entries: Vec<(u32, PlatformEntry)> = world
        .query::<(&Platform, &Position, &Fuel, &WeaponBay)>()
        .iter()
        .filter(|(_, (platform, ..))| platform.status == PlatformStatus::Active)
        .map(|(entity, (platform, pos, fuel, bay))| {
            (
                platform.roster_slot,
                PlatformEntry {
                    entity,
                    id: platform.id,
                    position: *pos,
                    fuel: fuel.pounds,
                    weapons: bay.weapons.clone(),
                },
            )
        })
        .collect();
    entries.sort_by_key(|(slot, _)| *slot);
    entries.into_iter().map(|(_, entry)| entry).collect()
}

/// Targets still in the world, in roster order.
pub fn live_targets(world: &World) -> Vec<TargetEntry> {
    let mut entries: Vec<(u32, TargetEntry)> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(entity, (target, pos))| {
            (
                target.roster_slot,
                TargetEntry {
                    entity,
                    id: target.id,
                    position: *pos,
                },
            )
        })
        .collect();
    entries.sort_by_key(|(slot, _)| *slot);
    entries.into_iter().map(|(_, entry)| entry).collect()
}

/// Entity of the platform with `id`, grounded or not.
pub fn find_platform(world: &World, id: PlatformId) -> Option<Entity> {
    world
        .query::<&Platform>()
        .iter()
        .find(|(_, platform)| platform.id == id)
        .map(|(entity, _)| entity)
}

pub fn find_target(world: &World, id: TargetId) -> Option<Entity> {
    world
        .query::<&Target>()
        .iter()
        .find(|(_, target)| target.id == id)
        .map(|(entity, _)| entity)
}

/// Current position of platform `id`.
pub fn platform_position(world: &World, id: PlatformId) -> Option<Position> {
    let entity = find_platform(world, id)?;
    world.get::<&Position>(entity).ok().map(|pos| *pos)
}

pub fn has_active_platforms(world: &World) -> bool {
    world
        .query::<&Platform>()
        .iter()
        .any(|(_, platform)| platform.status == PlatformStatus::Active)
}

pub fn has_targets(world: &World) -> bool {
    world.query::<&Target>().iter().next().is_some()
}
