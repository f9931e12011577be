//! Entity spawn factories: turn an entity feed into platform and target entities.

use hecs::World;

use stigmergy_core::components::*;
use stigmergy_core::enums::{PlatformStatus, TargetPhase};
use stigmergy_core::feed::{EntityFeed, PlatformRecord, TargetRecord};

/// Spawn every platform (with its weapon bay) and target from `feed`.
/// The feed must already be validated.
pub fn populate(world: &mut World, feed: &EntityFeed, burn_rate: f64) {
    for (slot, record) in feed.platforms.iter().enumerate() {
        let weapons: Vec<Weapon> = feed
            .weapons_of(record.id)
            .enumerate()
            .map(|(serial, w)| Weapon {
                serial: serial as u32,
                range: w.range,
                kinematics: w.kinematics,
                expiring_factor: w.expiring_factor,
            })
            .collect();
        spawn_platform(world, record, slot as u32, weapons, burn_rate);
    }
    for (slot, record) in feed.targets.iter().enumerate() {
        spawn_target(world, record, slot as u32);
    }
}

pub fn spawn_platform(
    world: &mut World,
    record: &PlatformRecord,
    roster_slot: u32,
    weapons: Vec<Weapon>,
    burn_rate: f64,
) -> hecs::Entity {
    world.spawn((
        Platform {
            id: record.id,
            roster_slot,
            status: PlatformStatus::Active,
        },
        record.position,
        Fuel {
            pounds: record.fuel,
            burn_rate,
        },
        WeaponBay { weapons },
    ))
}

pub fn spawn_target(world: &mut World, record: &TargetRecord, roster_slot: u32) -> hecs::Entity {
    world.spawn((
        Target {
            id: record.id,
            roster_slot,
            phase: TargetPhase::Unassigned,
        },
        record.position,
    ))
}
