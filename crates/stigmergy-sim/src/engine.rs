//! Simulation engine: the allocation loop.
//!
//! `SimulationEngine` owns the hecs ECS world, runs the system pipeline
//! once per tick, and produces `WorldSnapshot`s. Completely headless and
//! free of wall clock time, so runs are reproducible from a seed.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stigmergy_core::config::PipelineConfig;
use stigmergy_core::enums::Phase;
use stigmergy_core::error::{ConfigError, FeedParseError};
use stigmergy_core::events::SimEvent;
use stigmergy_core::feed::EntityFeed;
use stigmergy_core::records::{EngagementRecord, Mutation};
use stigmergy_core::state::WorldSnapshot;
use stigmergy_core::types::SimTime;

use crate::engagement::ScoreState;
use crate::reports::ReportSet;
use crate::roster;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub pipeline: PipelineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pipeline: PipelineConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    rng: ChaCha8Rng,
    reports: ReportSet,
    engagement_log: Vec<EngagementRecord>,
    mutations: Vec<Mutation>,
    events: Vec<SimEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create an engine with an empty world. Fails on an invalid pipeline config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.pipeline.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            reports: ReportSet::default(),
            engagement_log: Vec::new(),
            mutations: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        })
    }

    /// Replace the world with the entities in `feed` and make the initial
    /// round-robin assignment.
    ///
    /// Setup events and mutations are carried by the first snapshot.
    pub fn load_feed(&mut self, feed: &EntityFeed) -> Result<(), FeedParseError> {
        feed.validate()?;

        self.world = World::new();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.reports = ReportSet::default();
        self.engagement_log.clear();
        self.mutations.clear();
        self.events.clear();
        self.score = ScoreState {
            targets_total: feed.targets.len() as u32,
            ..ScoreState::default()
        };

        world_setup::populate(&mut self.world, feed, self.config.pipeline.fuel_burn_rate);
        tracing::info!(
            target: "stigmergy::feed",
            platforms = feed.platforms.len(),
            weapons = feed.weapons.len(),
            targets = feed.targets.len(),
            seed = self.config.seed,
            "feed.loaded"
        );

        // A platform that starts dry never reports anything.
        systems::grounding::run(
            &mut self.world,
            &mut self.reports,
            &mut self.mutations,
            &mut self.score,
            self.time.tick,
            &mut self.events,
        );
        systems::assignment::run(
            &mut self.world,
            &mut self.reports,
            &mut self.mutations,
            self.config.pipeline.sensors_per_target,
            self.time.tick,
            Phase::Setup,
            &mut self.events,
        );
        Ok(())
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once finished, ticking is a no-op that still returns a snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        if !self.is_finished() {
            self.time.advance();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        let mutations = std::mem::take(&mut self.mutations);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.is_finished(),
            &self.reports,
            &self.engagement_log,
            mutations,
            events,
            &self.score,
        )
    }

    /// Tick until finished or `max_ticks` ticks have run. Returns the number of ticks run.
    pub fn run_until_finished(&mut self, max_ticks: u64) -> u64 {
        let mut ticks = 0;
        while ticks < max_ticks && !self.is_finished() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// No targets or no active platforms remain.
    pub fn is_finished(&self) -> bool {
        !roster::has_targets(&self.world) || !roster::has_active_platforms(&self.world)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn reports(&self) -> &ReportSet {
        &self.reports
    }

    pub fn engagement_log(&self) -> &[EngagementRecord] {
        &self.engagement_log
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;
        let pipeline = &self.config.pipeline;

        // 1. Movement (jitter + fuel burn)
        systems::movement::run(&mut self.world, &mut self.rng, pipeline, tick, &mut self.events);
        // 2. Grounding prune
        systems::grounding::run(
            &mut self.world,
            &mut self.reports,
            &mut self.mutations,
            &mut self.score,
            tick,
            &mut self.events,
        );
        // 3. Track assignment (round-robin rebuild)
        systems::assignment::run(
            &mut self.world,
            &mut self.reports,
            &mut self.mutations,
            pipeline.sensors_per_target,
            tick,
            Phase::Assignment,
            &mut self.events,
        );
        // 4. Conflict resolution
        systems::conflict::run(
            &self.world,
            &mut self.reports,
            &mut self.mutations,
            tick,
            &mut self.events,
        );
        // 5. Weapon selection + engagement
        systems::engage::run(
            &mut self.world,
            &mut self.reports,
            &mut self.mutations,
            &mut self.engagement_log,
            &mut self.score,
            tick,
            &mut self.events,
        );
        // 6. Reallocation
        if pipeline.reallocation_enabled {
            systems::reallocation::run(
                &self.world,
                &mut self.reports,
                &mut self.mutations,
                tick,
                &mut self.events,
            );
        }
        tracing::debug!(
            target: "stigmergy::engine",
            tick,
            reports = self.reports.len(),
            destroyed = self.score.targets_destroyed,
            "tick.complete"
        );
    }
}
