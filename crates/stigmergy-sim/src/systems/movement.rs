//! Movement system: bounded random drift plus fuel burn.
//!
//! Not a dynamics model. Each tick every active platform and target is
//! displaced by an independent uniform offset per axis.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use stigmergy_core::components::Fuel;
use stigmergy_core::config::PipelineConfig;
use stigmergy_core::enums::Phase;
use stigmergy_core::events::{EventKind, EventSink, PhaseEmitter};
use stigmergy_core::types::Position;

use crate::roster;

/// Advance every active platform and live target by one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &PipelineConfig,
    tick: u64,
    sink: &mut dyn EventSink,
) {
    let mut events = PhaseEmitter::new(sink, tick, Phase::Movement);

    let platforms = roster::active_platforms(world);
    let moved = platforms.len();
    for entry in platforms {
        let Ok((pos, fuel)) = world.query_one_mut::<(&mut Position, &mut Fuel)>(entry.entity)
        else {
            continue;
        };
        pos.translate(
            jitter(rng, config.platform_jitter),
            jitter(rng, config.platform_jitter),
            jitter(rng, config.platform_jitter),
        );
        if config.fuel_enabled {
            burn_fuel(fuel);
        }
        events.emit(EventKind::PlatformMoved {
            platform: entry.id,
            position: *pos,
            fuel: fuel.pounds,
        });
    }

    for entry in roster::live_targets(world) {
        if let Ok(pos) = world.query_one_mut::<&mut Position>(entry.entity) {
            pos.translate(
                jitter(rng, config.target_jitter),
                jitter(rng, config.target_jitter),
                jitter(rng, config.target_jitter),
            );
        }
    }
    tracing::trace!(target: "stigmergy::movement", platforms = moved, tick, "movement.applied");
}

/// Burn one tick of fuel, floored at zero.
pub fn burn_fuel(fuel: &mut Fuel) {
    fuel.pounds = (fuel.pounds - fuel.burn_rate).max(0.0);
}

/// Uniform sample in `[-half_width, half_width]`. A zero bound draws nothing from the rng.
fn jitter(rng: &mut ChaCha8Rng, half_width: f64) -> f64 {
    if half_width > 0.0 {
        rng.gen_range(-half_width..=half_width)
    } else {
        0.0
    }
}
