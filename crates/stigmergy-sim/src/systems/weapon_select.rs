//! Weapon selector: pick the (platform, weapon) with the highest
//! Probability of Guide for a target.

use stigmergy_core::error::EngageError;
use stigmergy_core::events::{EventKind, PhaseEmitter};
use stigmergy_core::types::WeaponRef;

use crate::engagement::WeaponChoice;
use crate::geometry;
use crate::roster::{PlatformEntry, TargetEntry};

/// Best weapon for `target` among `platforms`.
///
/// Candidates are visited fuel-ascending (stable, so equal fuel keeps
/// roster order) and then in bay order. Only a strictly greater PG
/// replaces the incumbent. Fails with `NoCandidate` unless the winner's
/// PG is positive.
pub fn select(
    platforms: &[PlatformEntry],
    target: &TargetEntry,
    events: &mut PhaseEmitter<'_>,
) -> Result<WeaponChoice, EngageError> {
    let mut ordered: Vec<&PlatformEntry> = platforms.iter().collect();
    ordered.sort_by(|a, b| a.fuel.total_cmp(&b.fuel));

    let mut best: Option<WeaponChoice> = None;
    let mut best_pg = f64::NEG_INFINITY;
    for platform in ordered {
        let distance = platform.position.range_to(&target.position);
        for weapon in &platform.weapons {
            if distance > weapon.range {
                continue;
            }
            let pg = geometry::probability_of_guide(distance, weapon, platform.fuel);
            events.emit(EventKind::PgComputed {
                platform: platform.id,
                target: target.id,
                weapon_range: weapon.range,
                distance,
                kinematics: weapon.kinematics,
                expiring_factor: weapon.expiring_factor,
                fuel: platform.fuel,
                pg,
            });
            if pg > best_pg {
                best_pg = pg;
                best = Some(WeaponChoice {
                    weapon: WeaponRef {
                        platform: platform.id,
                        serial: weapon.serial,
                    },
                    weapon_range: weapon.range,
                    pg,
                });
            }
        }
    }

    match best {
        Some(choice) if choice.pg > 0.0 => {
            events.emit(EventKind::WeaponSelected {
                platform: choice.weapon.platform,
                target: target.id,
                weapon_range: choice.weapon_range,
                pg: choice.pg,
            });
            Ok(choice)
        }
        _ => {
            events.emit(EventKind::NoCandidate { target: target.id });
            Err(EngageError::NoCandidate { target: target.id })
        }
    }
}
