//! Synthetic entity feed generator.
//!
//! Builds a feed shaped like the classic 10-plane / 50-target exercise:
//! planes low over a 100 x 100 box, targets spread higher up, and a fixed
//! weapon loadout table per plane.

use rand::Rng;
use serde::{Deserialize, Serialize};

use stigmergy_core::constants::{GENERATOR_LAST_PLATFORM_FUEL, GENERATOR_LOADOUT};
use stigmergy_core::feed::{EntityFeed, PlatformRecord, TargetRecord, WeaponRecord};
use stigmergy_core::types::{PlatformId, Position, TargetId};

/// Sizes of a generated scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub platforms: u32,
    pub targets: u32,
    pub weapons_per_platform: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            platforms: 10,
            targets: 50,
            weapons_per_platform: 5,
        }
    }
}

/// Generate a feed. Ids start at 1. Deterministic for a given rng state.
pub fn generate_feed(rng: &mut impl Rng, params: &GeneratorParams) -> EntityFeed {
    let mut feed = EntityFeed::default();

    for i in 1..=params.platforms {
        let position = Position::new(
            rng.gen_range(0.0..=100.0),
            rng.gen_range(0.0..=100.0),
            rng.gen_range(0.0..=10.0),
        );
        let fuel = if i == params.platforms {
            GENERATOR_LAST_PLATFORM_FUEL
        } else {
            rng.gen_range(10.0..=100.0)
        };
        feed.platforms.push(PlatformRecord {
            id: PlatformId(i),
            position,
            fuel,
        });
    }

    for (idx, platform) in feed.platforms.iter().enumerate() {
        let loadout = &GENERATOR_LOADOUT[idx % GENERATOR_LOADOUT.len()];
        for w in 0..params.weapons_per_platform as usize {
            feed.weapons.push(WeaponRecord {
                platform: platform.id,
                range: loadout[w % loadout.len()],
                kinematics: rng.gen_range(1.0..=2.0),
                expiring_factor: rng.gen_range(1.0..=2.0),
            });
        }
    }

    for i in 1..=params.targets {
        feed.targets.push(TargetRecord {
            id: TargetId(i),
            position: Position::new(
                rng.gen_range(0.0..=100.0),
                rng.gen_range(0.0..=100.0),
                rng.gen_range(10.0..=100.0),
            ),
        });
    }

    tracing::debug!(
        target: "stigmergy::feed",
        platforms = feed.platforms.len(),
        weapons = feed.weapons.len(),
        targets = feed.targets.len(),
        "feed.generated"
    );
    feed
}
